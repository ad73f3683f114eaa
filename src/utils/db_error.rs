//! Translation of storage constraint violations into field errors.

use crate::application::validation::{FieldErrors, messages};
use crate::error::AppError;

/// Unique constraints and the request field each one guards.
const UNIQUE_CONSTRAINTS: &[(&str, &str)] = &[
    ("countries_country_name_key", "country_name"),
    ("cities_city_name_key", "city_name"),
    ("freights_freight_name_key", "freight_name"),
    ("freights_freight_speditor_name_key", "freight_speditor_name"),
];

/// Foreign key from `cities.country_id`; violated on insert/update when the
/// referenced country disappeared after validation.
const CITY_COUNTRY_FKEY: &str = "cities_country_id_fkey";

/// Returns the request field guarded by a violated unique constraint.
pub fn unique_violation_field(e: &sqlx::Error) -> Option<&'static str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    let constraint = db_err.constraint()?;
    UNIQUE_CONSTRAINTS
        .iter()
        .find(|(name, _)| *name == constraint)
        .map(|(_, field)| *field)
}

/// Returns true if the error is a foreign-key violation on the city → country reference.
pub fn is_city_country_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_foreign_key_violation() && matches!(db_err.constraint(), Some(CITY_COUNTRY_FKEY))
}

/// Converts the error of a `DELETE`.
///
/// A foreign-key violation means rows still reference the target, which is
/// the store rejecting the delete. Anything else converts as usual.
pub fn delete_error(e: sqlx::Error) -> AppError {
    let rejected = e
        .as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation());

    if rejected {
        AppError::DeleteFailed
    } else {
        AppError::from(e)
    }
}

/// Builds the field errors a constraint violation stands for, if any.
///
/// Foreign-key violations map to a field error for writes to `cities`.
/// Deletes convert their errors through [`delete_error`] instead.
pub fn constraint_field_errors(e: &sqlx::Error) -> Option<FieldErrors> {
    if let Some(field) = unique_violation_field(e) {
        return Some(FieldErrors::single(field, messages::taken(field)));
    }

    if is_city_country_violation(e) {
        return Some(FieldErrors::single(
            "country",
            messages::invalid_selection("country"),
        ));
    }

    None
}
