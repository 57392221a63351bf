use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for the API root
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponseDto {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
