use async_graphql::{Context, Object, ID};
use unit_conversion::{convert, Unit};

use crate::{
    directives::base_unit,
    error::{conversion_error, out_of_range},
    scalars::Date,
    store::{PeopleStore, PersonRecord},
    units::{HeightUnit, WeightUnit},
};

pub struct Person(pub(crate) PersonRecord);

#[Object]
impl Person {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Height in the requested unit, centimeters by default.
    #[graphql(directive = base_unit::apply(unit_conversion::HeightUnit::BASE.symbol().to_owned()))]
    async fn height(&self, #[graphql(default)] unit: HeightUnit) -> async_graphql::Result<f64> {
        measure(self.0.height_cm, unit_conversion::HeightUnit::from(unit))
    }

    /// Weight in the requested unit, kilograms by default.
    #[graphql(directive = base_unit::apply(unit_conversion::WeightUnit::BASE.symbol().to_owned()))]
    async fn weight(&self, #[graphql(default)] unit: WeightUnit) -> async_graphql::Result<f64> {
        measure(self.0.weight_kg, unit_conversion::WeightUnit::from(unit))
    }

    /// Weight in kilograms.
    #[graphql(deprecation = "Use `weight` instead.")]
    async fn mass(&self) -> f64 {
        self.0.weight_kg
    }

    async fn birthday(&self) -> Option<Date> {
        self.0.birthday.map(Date)
    }

    /// Friends that are still in the graph.
    async fn friends(&self, ctx: &Context<'_>) -> Vec<Person> {
        let store = ctx.data_unchecked::<PeopleStore>();

        self.0.friends.iter().filter_map(|id| store.get(*id)).map(Person).collect()
    }
}

fn measure<U: Unit>(base_value: f64, unit: U) -> async_graphql::Result<f64> {
    let value = convert(U::QUANTITY, base_value, unit.symbol()).map_err(conversion_error)?;

    // Float! cannot carry NaN or infinity.
    if !value.is_finite() {
        return Err(out_of_range(U::QUANTITY, base_value, unit.symbol()));
    }

    Ok(value)
}
