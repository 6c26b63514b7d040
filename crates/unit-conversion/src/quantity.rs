use crate::unit::{self, HeightUnit, Unit, WeightUnit};

/// The kinds of quantity a measurable entity stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Quantity {
    Height,
    Weight,
}

impl Quantity {
    pub fn base_unit(self) -> &'static str {
        match self {
            Quantity::Height => HeightUnit::BASE.symbol(),
            Quantity::Weight => WeightUnit::BASE.symbol(),
        }
    }

    /// The conversion factor of `symbol`, or `None` if this kind has no such unit.
    pub fn factor(self, symbol: &str) -> Option<f64> {
        match self {
            Quantity::Height => unit::lookup::<HeightUnit>(symbol),
            Quantity::Weight => unit::lookup::<WeightUnit>(symbol),
        }
    }

    /// The conversion table of this kind, in declaration order.
    pub fn units(self) -> Vec<(&'static str, f64)> {
        match self {
            Quantity::Height => unit::table::<HeightUnit>(),
            Quantity::Weight => unit::table::<WeightUnit>(),
        }
    }

    pub fn symbols(self) -> Vec<&'static str> {
        self.units().into_iter().map(|(symbol, _)| symbol).collect()
    }
}
