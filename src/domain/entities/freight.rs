//! Freight entity.

use chrono::{DateTime, Utc};

/// A freight record.
///
/// Both `freight_name` and `freight_speditor_name` are unique.
/// `freight_weights` is free-form text (e.g. `"10T, 30T"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Freight {
    pub id: i64,
    pub freight_name: String,
    pub freight_speditor_name: String,
    pub freight_weights: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated data for inserting or replacing a freight record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFreight {
    pub freight_name: String,
    pub freight_speditor_name: String,
    pub freight_weights: String,
}
