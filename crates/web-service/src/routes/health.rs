use crate::models::err::AppError;
use crate::models::health::HealthReply;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use chrono::Utc;

/// 健康检查
#[utoipa::path(get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is running", body = HealthReply)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthReply>, AppError> {
    let stats = state.reviews.stats().await?;

    Ok(Json(HealthReply {
        success: true,
        message: "Server is running".to_string(),
        timestamp: Utc::now(),
        reviews: stats.into(),
    }))
}
