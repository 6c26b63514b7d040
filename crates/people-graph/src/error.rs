use async_graphql::ErrorExtensions;
use unit_conversion::{ConversionError, Quantity};

/// Why a read or write against the people store was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("no person with id {0}")]
    NotFound(u64),
    #[error(r#""{0}" is not a valid person id"#)]
    MalformedId(String),
    #[error("a person needs a non-empty name")]
    EmptyName,
    #[error("{quantity} must be a finite, non-negative number, got {value}")]
    InvalidMeasurement { quantity: Quantity, value: f64 },
    #[error("{quantity} {value} is too large to express in every {quantity} unit")]
    OutOfRange { quantity: Quantity, value: f64 },
    #[error("cannot befriend unknown person {0}")]
    UnknownFriend(u64),
    #[error("no person id is left to assign")]
    IdsExhausted,
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "PERSON_NOT_FOUND",
            StoreError::IdsExhausted => "STORE_FULL",
            StoreError::MalformedId(_)
            | StoreError::EmptyName
            | StoreError::InvalidMeasurement { .. }
            | StoreError::OutOfRange { .. }
            | StoreError::UnknownFriend(_) => "INVALID_INPUT",
        }
    }
}

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, extensions| extensions.set("code", self.code()))
    }
}

/// Field error for a unit the conversion tables do not know.
pub(crate) fn conversion_error(error: ConversionError) -> async_graphql::Error {
    tracing::warn!("rejected unit conversion: {error}");

    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| extensions.set("code", "INVALID_UNIT"))
}

/// Field error for a stored value whose rescaled form is not a finite number.
pub(crate) fn out_of_range(quantity: Quantity, base_value: f64, unit: &str) -> async_graphql::Error {
    tracing::warn!("{quantity} {base_value} overflows in {unit}");

    async_graphql::Error::new(format!("{quantity} {base_value} cannot be expressed in {unit}"))
        .extend_with(|_, extensions| extensions.set("code", "MEASUREMENT_OUT_OF_RANGE"))
}

#[cfg(test)]
mod tests {
    use async_graphql::Value;

    use super::*;

    #[test]
    fn invalid_unit_carries_a_code() {
        let error = unit_conversion::convert(Quantity::Height, 1.0, "INCH").unwrap_err();
        let error = conversion_error(error);

        assert_eq!(
            error.message,
            r#""INCH" is not a valid height unit (expected one of CENTIMETER, FOOT)."#
        );

        let code = error.extensions.as_ref().and_then(|extensions| extensions.get("code"));
        assert_eq!(code, Some(&Value::from("INVALID_UNIT")));
    }

    #[test]
    fn store_errors_carry_their_code() {
        let error = StoreError::NotFound(7).extend();
        let code = error.extensions.as_ref().and_then(|extensions| extensions.get("code"));

        assert_eq!(error.message, "no person with id 7");
        assert_eq!(code, Some(&Value::from("PERSON_NOT_FOUND")));

        let error = StoreError::EmptyName.extend();
        let code = error.extensions.as_ref().and_then(|extensions| extensions.get("code"));

        assert_eq!(code, Some(&Value::from("INVALID_INPUT")));

        let error = StoreError::IdsExhausted.extend();
        let code = error.extensions.as_ref().and_then(|extensions| extensions.get("code"));

        assert_eq!(code, Some(&Value::from("STORE_FULL")));
    }

    #[test]
    fn overflow_carries_a_code() {
        let error = out_of_range(Quantity::Height, 2.5, "FOOT");
        let code = error.extensions.as_ref().and_then(|extensions| extensions.get("code"));

        assert_eq!(error.message, "height 2.5 cannot be expressed in FOOT");
        assert_eq!(code, Some(&Value::from("MEASUREMENT_OUT_OF_RANGE")));
    }
}
