use async_graphql::{Context, InputObject, Object, SimpleObject, ID};
use unit_conversion::Quantity;

use crate::{person::Person, store::PeopleStore};

#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    /// Everyone in the graph ordered by id, optionally narrowed down by `filter`.
    async fn people(&self, ctx: &Context<'_>, filter: Option<PeopleFilter>) -> Vec<Person> {
        let store = ctx.data_unchecked::<PeopleStore>();
        let filter = filter.unwrap_or_default();

        let people: Vec<_> = store
            .all()
            .into_iter()
            .filter(|person| filter.matches(person.id, &person.name))
            .map(Person)
            .collect();

        tracing::debug!(count = people.len(), "listed people");

        people
    }

    async fn person(&self, ctx: &Context<'_>, id: ID) -> Option<Person> {
        let store = ctx.data_unchecked::<PeopleStore>();
        let person = parse_id(&id).and_then(|id| store.get(id));

        if person.is_none() {
            tracing::debug!(id = id.as_str(), "person not found");
        }

        person.map(Person)
    }

    /// The conversion tables behind the `height` and `weight` fields.
    async fn units(&self) -> UnitCatalog {
        UnitCatalog {
            height: UnitFactor::table(Quantity::Height),
            weight: UnitFactor::table(Quantity::Weight),
        }
    }
}

#[derive(InputObject, Debug, Default)]
pub struct PeopleFilter {
    /// Case-insensitive substring of the name.
    name_contains: Option<String>,
    /// Only these people. Ids that do not exist are ignored.
    ids: Option<Vec<ID>>,
}

impl PeopleFilter {
    fn matches(&self, id: u64, name: &str) -> bool {
        let name_matches = match &self.name_contains {
            Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        };

        let id_matches = match &self.ids {
            Some(ids) => ids.iter().filter_map(parse_id).any(|candidate| candidate == id),
            None => true,
        };

        name_matches && id_matches
    }
}

#[derive(SimpleObject)]
pub struct UnitCatalog {
    height: Vec<UnitFactor>,
    weight: Vec<UnitFactor>,
}

#[derive(SimpleObject)]
pub struct UnitFactor {
    symbol: String,
    /// Multiplier applied to the stored value.
    factor: f64,
    is_base: bool,
}

impl UnitFactor {
    fn table(quantity: Quantity) -> Vec<UnitFactor> {
        quantity
            .units()
            .into_iter()
            .map(|(symbol, factor)| UnitFactor {
                symbol: symbol.to_owned(),
                factor,
                is_base: symbol == quantity.base_unit(),
            })
            .collect()
    }
}

pub(crate) fn parse_id(id: &ID) -> Option<u64> {
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_name_ignores_case() {
        let filter = PeopleFilter {
            name_contains: Some("TURING".into()),
            ids: None,
        };

        assert!(filter.matches(2, "Alan Turing"));
        assert!(!filter.matches(1, "Ada Lovelace"));
    }

    #[test]
    fn filter_by_ids_skips_malformed_ones() {
        let filter = PeopleFilter {
            name_contains: None,
            ids: Some(vec![ID::from("x"), ID::from("3")]),
        };

        assert!(filter.matches(3, "Grace Hopper"));
        assert!(!filter.matches(1, "Ada Lovelace"));
    }

    #[test]
    fn empty_filter_matches_everyone() {
        assert!(PeopleFilter::default().matches(1, "Ada Lovelace"));
    }
}
