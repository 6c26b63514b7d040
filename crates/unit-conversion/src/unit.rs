use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::Quantity;

/// A unit of one quantity kind. The enumeration implementing this trait is the
/// conversion table of its kind: every variant is a key, and `factor` is the
/// multiplier applied to a base-unit value.
pub trait Unit: Copy + Eq + FromStr + IntoEnumIterator + Into<&'static str> + 'static {
    const QUANTITY: Quantity;

    /// The unit values of this kind are stored in. Its factor is exactly 1.
    const BASE: Self;

    fn factor(self) -> f64;

    fn symbol(self) -> &'static str {
        self.into()
    }

    fn rescale(self, base_value: f64) -> f64 {
        base_value * self.factor()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HeightUnit {
    #[default]
    Centimeter,
    Foot,
}

impl Unit for HeightUnit {
    const QUANTITY: Quantity = Quantity::Height;
    const BASE: Self = HeightUnit::Centimeter;

    fn factor(self) -> f64 {
        match self {
            HeightUnit::Centimeter => 1.0,
            HeightUnit::Foot => 30.48,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    #[default]
    Kilogram,
    Pound,
}

impl Unit for WeightUnit {
    const QUANTITY: Quantity = Quantity::Weight;
    const BASE: Self = WeightUnit::Kilogram;

    fn factor(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Pound => 0.45,
        }
    }
}

pub(crate) fn lookup<U: Unit>(symbol: &str) -> Option<f64> {
    symbol.parse::<U>().ok().map(U::factor)
}

pub(crate) fn table<U: Unit>() -> Vec<(&'static str, f64)> {
    U::iter().map(|unit| (unit.symbol(), unit.factor())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_screaming_case() {
        assert_eq!(HeightUnit::Centimeter.symbol(), "CENTIMETER");
        assert_eq!(HeightUnit::Foot.symbol(), "FOOT");
        assert_eq!(WeightUnit::Kilogram.symbol(), "KILOGRAM");
        assert_eq!(WeightUnit::Pound.symbol(), "POUND");
    }

    #[test]
    fn symbols_parse_exactly() {
        assert_eq!("FOOT".parse::<HeightUnit>(), Ok(HeightUnit::Foot));
        assert!("foot".parse::<HeightUnit>().is_err());
        assert!("POUND".parse::<HeightUnit>().is_err());
    }

    #[test]
    fn units_know_their_quantity() {
        assert_eq!(HeightUnit::QUANTITY, Quantity::Height);
        assert_eq!(WeightUnit::QUANTITY, Quantity::Weight);
        assert_eq!(HeightUnit::QUANTITY.base_unit(), HeightUnit::BASE.symbol());
        assert_eq!(WeightUnit::QUANTITY.base_unit(), WeightUnit::BASE.symbol());
    }

    #[test]
    fn default_is_base() {
        assert_eq!(HeightUnit::default(), HeightUnit::BASE);
        assert_eq!(WeightUnit::default(), WeightUnit::BASE);
    }

    #[test]
    fn rescale_multiplies_by_factor() {
        assert_eq!(HeightUnit::Foot.rescale(175.0), 175.0 * 30.48);
        assert_eq!(WeightUnit::Pound.rescale(75.0), 33.75);
    }
}
