//! Plain message responses.

use serde::Serialize;

pub const RETRIEVED_MESSAGE: &str = "Retrieved successfully.";
pub const DELETED_MESSAGE: &str = "Record has been deleted.";

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: DELETED_MESSAGE,
        }
    }
}
