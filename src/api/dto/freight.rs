//! DTOs for the freight resource.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::message::RETRIEVED_MESSAGE;
use crate::domain::entities::Freight;

#[derive(Debug, Serialize)]
pub struct FreightResource {
    pub id: i64,
    pub freight_name: String,
    pub freight_speditor_name: String,
    pub freight_weights: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Freight> for FreightResource {
    fn from(f: Freight) -> Self {
        Self {
            id: f.id,
            freight_name: f.freight_name,
            freight_speditor_name: f.freight_speditor_name,
            freight_weights: f.freight_weights,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FreightListResponse {
    pub freights: Vec<FreightResource>,
    pub message: &'static str,
}

impl FreightListResponse {
    pub fn new(freights: Vec<Freight>) -> Self {
        Self {
            freights: freights.into_iter().map(FreightResource::from).collect(),
            message: RETRIEVED_MESSAGE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FreightResponse {
    pub freight: FreightResource,
}

impl From<Freight> for FreightResponse {
    fn from(freight: Freight) -> Self {
        Self {
            freight: freight.into(),
        }
    }
}
