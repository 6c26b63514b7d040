use async_graphql::{Context, ErrorExtensions, InputObject, MaybeUndefined, Object, ID};

use crate::{
    error::StoreError,
    person::Person,
    query::parse_id,
    scalars::Date,
    store::{NewPerson, PeopleStore, PersonChanges},
};

#[derive(Default)]
pub struct Mutation;

#[Object]
impl Mutation {
    async fn add_person(&self, ctx: &Context<'_>, input: PersonInput) -> async_graphql::Result<Person> {
        let store = ctx.data_unchecked::<PeopleStore>();
        let person = input.into_new_person().map_err(|err| err.extend())?;
        let record = store.insert(person).map_err(|err| err.extend())?;

        tracing::info!(id = record.id, name = %record.name, "added person");

        Ok(Person(record))
    }

    async fn update_person(&self, ctx: &Context<'_>, id: ID, patch: PersonPatch) -> async_graphql::Result<Person> {
        let store = ctx.data_unchecked::<PeopleStore>();
        let id = parse_id(&id).ok_or_else(|| StoreError::MalformedId(id.to_string()).extend())?;
        let record = store.update(id, patch.into()).map_err(|err| err.extend())?;

        tracing::info!(id, "updated person");

        Ok(Person(record))
    }

    /// Removes a person and their friendships. Returns `false` if there was nobody to remove.
    async fn delete_person(&self, ctx: &Context<'_>, id: ID) -> bool {
        let store = ctx.data_unchecked::<PeopleStore>();
        let removed = parse_id(&id).is_some_and(|id| store.remove(id));

        if removed {
            tracing::info!(id = id.as_str(), "deleted person");
        }

        removed
    }
}

/// A new person. Height in centimeters, weight in kilograms.
#[derive(InputObject, Debug)]
pub struct PersonInput {
    name: String,
    height: f64,
    weight: f64,
    birthday: Option<Date>,
    #[graphql(default)]
    friend_ids: Vec<ID>,
}

impl PersonInput {
    fn into_new_person(self) -> Result<NewPerson, StoreError> {
        let friends = self
            .friend_ids
            .iter()
            .map(|id| parse_id(id).ok_or_else(|| StoreError::MalformedId(id.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewPerson {
            name: self.name,
            height_cm: self.height,
            weight_kg: self.weight,
            birthday: self.birthday.map(|date| date.0),
            friends,
        })
    }
}

/// Changes to a person. Omitted fields stay as they are; a `null` birthday clears it.
#[derive(InputObject, Debug)]
pub struct PersonPatch {
    name: Option<String>,
    height: Option<f64>,
    weight: Option<f64>,
    birthday: MaybeUndefined<Date>,
}

impl From<PersonPatch> for PersonChanges {
    fn from(patch: PersonPatch) -> Self {
        let birthday = match patch.birthday {
            MaybeUndefined::Undefined => None,
            MaybeUndefined::Null => Some(None),
            MaybeUndefined::Value(date) => Some(Some(date.0)),
        };

        PersonChanges {
            name: patch.name,
            height_cm: patch.height,
            weight_kg: patch.weight,
            birthday,
        }
    }
}
