//! Shape rules for freight requests.

use validator::Validate;

use super::{RawInput, text};

/// Freight fields read from a request body.
///
/// `freight_weights` is free-form: any present value is stored as text.
#[derive(Debug, Default, Validate)]
pub struct FreightInput {
    #[validate(required(message = "The freight name field is required."))]
    pub freight_name: Option<String>,

    #[validate(required(message = "The freight speditor name field is required."))]
    pub freight_speditor_name: Option<String>,

    #[validate(required(message = "The freight weights field is required."))]
    pub freight_weights: Option<String>,
}

impl FreightInput {
    pub fn from_raw(raw: &RawInput) -> Self {
        Self {
            freight_name: text(raw, "freight_name"),
            freight_speditor_name: text(raw, "freight_speditor_name"),
            freight_weights: text(raw, "freight_weights"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::FieldErrors;
    use serde_json::json;

    fn input(value: serde_json::Value) -> FreightInput {
        FreightInput::from_raw(value.as_object().unwrap())
    }

    #[test]
    fn test_all_fields_required() {
        let errors = FieldErrors::from(
            input(json!({
                "freight_name": "",
                "freight_speditor_name": "",
                "freight_weights": ""
            }))
            .validate()
            .unwrap_err(),
        );

        assert_eq!(
            errors.get("freight_name").unwrap(),
            ["The freight name field is required."]
        );
        assert_eq!(
            errors.get("freight_speditor_name").unwrap(),
            ["The freight speditor name field is required."]
        );
        assert_eq!(
            errors.get("freight_weights").unwrap(),
            ["The freight weights field is required."]
        );
    }

    #[test]
    fn test_weights_accept_any_value() {
        let numeric = input(json!({
            "freight_name": "Apples",
            "freight_speditor_name": "apples",
            "freight_weights": 12000
        }));
        assert!(numeric.validate().is_ok());
        assert_eq!(numeric.freight_weights.as_deref(), Some("12000"));

        let listed = input(json!({
            "freight_name": "Apples",
            "freight_speditor_name": "apples",
            "freight_weights": "10T, 30T"
        }));
        assert!(listed.validate().is_ok());
        assert_eq!(listed.freight_weights.as_deref(), Some("10T, 30T"));
    }

    #[test]
    fn test_required_messages_match_catalogue() {
        let errors = FieldErrors::from(input(json!({})).validate().unwrap_err());

        for field in ["freight_name", "freight_speditor_name", "freight_weights"] {
            assert_eq!(
                errors.get(field).unwrap(),
                [crate::application::validation::messages::required(field)]
            );
        }
    }
}
