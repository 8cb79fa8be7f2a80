use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid symbol: '{value}' {location}")]
    InvalidSymbol {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid quantity: {value} (must be at least 1) {location}")]
    InvalidQuantity { value: i64, location: ErrorLocation },

    #[error("Invalid date '{value}': {source} {location}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
