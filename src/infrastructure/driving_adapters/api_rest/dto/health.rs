//! Health DTOs

use serde::Serialize;

use crate::domain::gateways::PoolStatus;

/// Pool occupancy as reported by the health endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStatusDto {
    pub size: u32,
    pub idle: usize,
}

impl From<PoolStatus> for PoolStatusDto {
    fn from(status: PoolStatus) -> Self {
        Self {
            size: status.size,
            idle: status.idle,
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponseDto {
    pub status: String,
    pub pool: PoolStatusDto,
}

impl HealthResponseDto {
    #[must_use]
    pub fn ok(pool: PoolStatus) -> Self {
        Self {
            status: "ok".to_string(),
            pool: pool.into(),
        }
    }
}
