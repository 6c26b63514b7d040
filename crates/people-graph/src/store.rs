use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::NaiveDate;
use unit_conversion::Quantity;

use crate::{config::PersonSeed, error::StoreError, ConfigError};

/// A person as it is stored: measurements in their base units.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub id: u64,
    pub name: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub birthday: Option<NaiveDate>,
    pub friends: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub birthday: Option<NaiveDate>,
    pub friends: Vec<u64>,
}

/// Fields to change on an existing person. `None` leaves a field untouched;
/// `birthday: Some(None)` clears the birthday.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub birthday: Option<Option<NaiveDate>>,
}

/// The in-memory people table, shared by every resolver of a schema.
#[derive(Debug, Clone, Default)]
pub struct PeopleStore {
    people: Arc<RwLock<BTreeMap<u64, PersonRecord>>>,
}

impl PeopleStore {
    pub fn new(records: impl IntoIterator<Item = PersonRecord>) -> Self {
        let people = records.into_iter().map(|record| (record.id, record)).collect();

        PeopleStore {
            people: Arc::new(RwLock::new(people)),
        }
    }

    /// The three people every fresh graph starts with.
    pub fn seeded() -> Self {
        Self::new([
            PersonRecord {
                id: 1,
                name: "Ada Lovelace".to_string(),
                height_cm: 165.0,
                weight_kg: 55.0,
                birthday: NaiveDate::from_ymd_opt(1815, 12, 10),
                friends: vec![2],
            },
            PersonRecord {
                id: 2,
                name: "Alan Turing".to_string(),
                height_cm: 175.0,
                weight_kg: 75.0,
                birthday: NaiveDate::from_ymd_opt(1912, 6, 23),
                friends: vec![1, 3],
            },
            PersonRecord {
                id: 3,
                name: "Grace Hopper".to_string(),
                height_cm: 160.0,
                weight_kg: 58.0,
                birthday: NaiveDate::from_ymd_opt(1906, 12, 9),
                friends: vec![2],
            },
        ])
    }

    /// Builds a store from configured seed records, checking them the way mutations would.
    pub fn from_seed(seed: &[PersonSeed]) -> Result<Self, ConfigError> {
        let mut people = BTreeMap::new();

        for person in seed {
            if people.contains_key(&person.id) {
                return Err(ConfigError::DuplicateId(person.id));
            }

            validate_name(&person.name).map_err(|source| ConfigError::InvalidPerson { id: person.id, source })?;
            validate_measurement(Quantity::Height, person.height)
                .and_then(|()| validate_measurement(Quantity::Weight, person.weight))
                .map_err(|source| ConfigError::InvalidPerson { id: person.id, source })?;

            people.insert(
                person.id,
                PersonRecord {
                    id: person.id,
                    name: person.name.clone(),
                    height_cm: person.height,
                    weight_kg: person.weight,
                    birthday: person.birthday,
                    friends: person.friends.clone(),
                },
            );
        }

        for person in people.values() {
            if let Some(friend) = person.friends.iter().find(|friend| !people.contains_key(*friend)) {
                return Err(ConfigError::InvalidPerson {
                    id: person.id,
                    source: StoreError::UnknownFriend(*friend),
                });
            }
        }

        Ok(PeopleStore {
            people: Arc::new(RwLock::new(people)),
        })
    }

    /// Every person, ordered by id.
    pub fn all(&self) -> Vec<PersonRecord> {
        self.read().values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<PersonRecord> {
        self.read().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn insert(&self, person: NewPerson) -> Result<PersonRecord, StoreError> {
        validate_name(&person.name)?;
        validate_measurement(Quantity::Height, person.height_cm)?;
        validate_measurement(Quantity::Weight, person.weight_kg)?;

        let mut people = self.write();

        if let Some(friend) = person.friends.iter().find(|friend| !people.contains_key(*friend)) {
            return Err(StoreError::UnknownFriend(*friend));
        }

        let id = match people.last_key_value() {
            Some((last, _)) => last.checked_add(1).ok_or(StoreError::IdsExhausted)?,
            None => 1,
        };

        let record = PersonRecord {
            id,
            name: person.name,
            height_cm: person.height_cm,
            weight_kg: person.weight_kg,
            birthday: person.birthday,
            friends: person.friends,
        };

        people.insert(id, record.clone());

        Ok(record)
    }

    pub fn update(&self, id: u64, changes: PersonChanges) -> Result<PersonRecord, StoreError> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }

        if let Some(height) = changes.height_cm {
            validate_measurement(Quantity::Height, height)?;
        }

        if let Some(weight) = changes.weight_kg {
            validate_measurement(Quantity::Weight, weight)?;
        }

        let mut people = self.write();
        let record = people.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if let Some(name) = changes.name {
            record.name = name;
        }

        if let Some(height) = changes.height_cm {
            record.height_cm = height;
        }

        if let Some(weight) = changes.weight_kg {
            record.weight_kg = weight;
        }

        if let Some(birthday) = changes.birthday {
            record.birthday = birthday;
        }

        Ok(record.clone())
    }

    /// Removes a person and every friendship pointing at them. Returns whether they existed.
    pub fn remove(&self, id: u64) -> bool {
        let mut people = self.write();

        if people.remove(&id).is_none() {
            return false;
        }

        for person in people.values_mut() {
            person.friends.retain(|friend| *friend != id);
        }

        true
    }

    // Writers never panic while holding the lock, so a poisoned table is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<u64, PersonRecord>> {
        self.people.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<u64, PersonRecord>> {
        self.people.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }

    Ok(())
}

fn validate_measurement(quantity: Quantity, value: f64) -> Result<(), StoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(StoreError::InvalidMeasurement { quantity, value });
    }

    if quantity.units().into_iter().any(|(_, factor)| !(value * factor).is_finite()) {
        return Err(StoreError::OutOfRange { quantity, value });
    }

    Ok(())
}
