//! Rescaling of quantities stored in a canonical base unit.
//!
//! Every measurable value is stored in the base unit of its [`Quantity`]
//! (centimeters for height, kilograms for weight). Reading it in another unit
//! multiplies the stored value by that unit's factor. The factor tables are the
//! [`HeightUnit`] and [`WeightUnit`] enumerations themselves, so a table cannot
//! hold a key that has no enumeration value.

mod error;
mod quantity;
mod unit;

pub use error::ConversionError;
pub use quantity::Quantity;
pub use unit::{HeightUnit, Unit, WeightUnit};

/// Rescales `base_value`, expressed in the base unit of `kind`, to `requested_unit`.
///
/// Fails with [`ConversionError::InvalidUnit`] if `requested_unit` is not a unit of `kind`.
pub fn convert(kind: Quantity, base_value: f64, requested_unit: &str) -> Result<f64, ConversionError> {
    let factor = kind.factor(requested_unit).ok_or_else(|| ConversionError::InvalidUnit {
        quantity: kind,
        unit: requested_unit.to_owned(),
    })?;

    Ok(base_value * factor)
}
