use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Result payload of a delete. Deleting an id that is not present still
/// reports success.
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
