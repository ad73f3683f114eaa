//! Country entity.

use chrono::{DateTime, Utc};

/// A country stored in the registry.
///
/// `country_name` is unique across all countries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: i64,
    pub country_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Country {
    pub fn new(
        id: i64,
        country_name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            country_name,
            created_at,
            updated_at,
        }
    }
}

/// Validated data for inserting or replacing a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCountry {
    pub country_name: String,
}
