use async_graphql::Enum;

/// Units a height can be read in. Heights are stored in centimeters.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[graphql(remote = "unit_conversion::HeightUnit")]
pub enum HeightUnit {
    #[default]
    Centimeter,
    Foot,
}

/// Units a weight can be read in. Weights are stored in kilograms.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[graphql(remote = "unit_conversion::WeightUnit")]
pub enum WeightUnit {
    #[default]
    Kilogram,
    Pound,
}
