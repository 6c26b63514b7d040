use crate::Quantity;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The requested symbol is not a key of the quantity's unit table.
    #[error(r#""{unit}" is not a valid {quantity} unit (expected one of {})."#, .quantity.symbols().join(", "))]
    InvalidUnit { quantity: Quantity, unit: String },
}
