use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HealthDto {
    /// `ok` or `degraded`.
    pub status: String,
    pub database: bool,
    pub version: String,
}
