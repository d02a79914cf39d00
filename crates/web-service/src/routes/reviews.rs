//! 评价公开接口

use crate::extract::AppJson;
use crate::models::err::AppError;
use crate::models::reviews::{PublicReviewList, ReviewSubmission, SubmitReviewReply};
use crate::AppState;
use axum::extract::State;
use axum::Json;
use tracing::{debug, instrument};

/// 提交评价
///
/// 新评价默认未审核，站长审核通过后才会出现在公开列表中。
///
/// ## 返回值
///
/// 只回显 `name/position/rating/text`，不会返回ID和邮箱。
#[utoipa::path(post,
    path = "/reviews",
    tag = "reviews",
    request_body = ReviewSubmission,
    responses(
        (status = 200, description = "Review accepted", body = SubmitReviewReply),
        (status = 400, description = "Invalid review", body = crate::models::common::ApiMessage)
    )
)]
#[instrument(skip_all)]
pub async fn submit_review(
    State(state): State<AppState>,
    AppJson(submission): AppJson<ReviewSubmission>,
) -> Result<Json<SubmitReviewReply>, AppError> {
    debug!("📝 收到评价提交 {:?}", submission.name);

    let review = state.reviews.submit(submission).await?;

    Ok(Json(SubmitReviewReply {
        success: true,
        message: "Thank you for your review! It will appear on the website after approval.".to_string(),
        review,
    }))
}

/// 已审核的评价列表
#[utoipa::path(get,
    path = "/reviews/approved",
    tag = "reviews",
    responses(
        (status = 200, description = "Approved reviews, oldest first", body = PublicReviewList)
    )
)]
#[instrument(skip_all)]
pub async fn list_approved_reviews(State(state): State<AppState>) -> Result<Json<PublicReviewList>, AppError> {
    let reviews = state.reviews.list_approved().await?;

    Ok(Json(PublicReviewList { success: true, reviews }))
}
