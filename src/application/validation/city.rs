//! Shape rules for city requests.

use serde_json::Value;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use super::{RawInput, as_integer, messages, present, text};

/// City fields read from a request body.
///
/// `country` keeps the raw JSON value so a non-numeric id can be reported as
/// a type error instead of failing deserialization.
#[derive(Debug, Default, Validate)]
pub struct CityInput {
    #[validate(required(message = "The city name field is required."))]
    pub city_name: Option<String>,

    #[validate(
        required(message = "The country field is required."),
        custom(function = "validate_country_id")
    )]
    pub country: Option<Value>,
}

impl CityInput {
    pub fn from_raw(raw: &RawInput) -> Self {
        Self {
            city_name: text(raw, "city_name"),
            country: present(raw, "country").cloned(),
        }
    }

    /// The referenced country id, when `country` holds an integer.
    pub fn country_id(&self) -> Option<i64> {
        self.country.as_ref().and_then(as_integer)
    }
}

fn validate_country_id(value: &Value) -> Result<(), ValidationError> {
    match as_integer(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("integer")
            .with_message(Cow::Owned(messages::integer("country")))),
    }
}
