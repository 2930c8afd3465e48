use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    /// Id of the removed row
    pub deleted: i64,
}

impl DeletedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            deleted: id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    #[schema(example = "ok")]
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            status: "ok".to_string(),
        }
    }
}
