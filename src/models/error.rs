use thiserror::Error;

/// Raised when an entity cannot be built from the given input.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("invalid {field}: {value}")]
    InvalidDimension { field: &'static str, value: String },

    #[error("invalid age: {0}")]
    InvalidAge(String),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid cash balance: {0}")]
    InvalidCash(f64),

    #[error("invalid apartment id: {0}")]
    InvalidApartmentId(String),
}
