use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 评价数量统计
#[derive(Deserialize, Debug, ToSchema, Serialize, PartialEq)]
pub struct ReviewCounts {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct HealthReply {
    pub success: bool,
    #[schema(example = "Server is running")]
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub reviews: ReviewCounts,
}

impl From<database::ReviewStats> for ReviewCounts {
    fn from(stats: database::ReviewStats) -> Self {
        Self {
            total: stats.total,
            approved: stats.approved,
            pending: stats.pending,
        }
    }
}
