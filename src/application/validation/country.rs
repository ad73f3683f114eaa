//! Shape rules for country requests.

use validator::Validate;

use super::{RawInput, text};

/// Country fields read from a request body.
#[derive(Debug, Default, Validate)]
pub struct CountryInput {
    #[validate(required(message = "The country name field is required."))]
    pub country_name: Option<String>,
}

impl CountryInput {
    pub fn from_raw(raw: &RawInput) -> Self {
        Self {
            country_name: text(raw, "country_name"),
        }
    }
}
