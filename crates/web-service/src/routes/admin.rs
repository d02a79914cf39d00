//! 评价管理接口
//!
//! 所有接口都需要在请求体中携带 `password`，口令错误返回401且不会修改任何数据。

use crate::extract::AppJson;
use crate::models::common::ApiMessage;
use crate::models::err::AppError;
use crate::models::reviews::{
    AdminCredential, AdminReviewList, AdminReviewReply, ApproveRequest, DeletedReviewReply,
};
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, instrument};

/// 查询所有评价（邮箱脱敏）
#[utoipa::path(post,
    path = "/admin/reviews",
    tag = "admin",
    request_body = AdminCredential,
    responses(
        (status = 200, description = "All reviews, oldest first", body = AdminReviewList),
        (status = 401, description = "Wrong password", body = ApiMessage)
    )
)]
#[instrument(skip_all)]
pub async fn admin_list_reviews(
    State(state): State<AppState>,
    credential: Option<AppJson<AdminCredential>>,
) -> Result<Json<AdminReviewList>, AppError> {
    let credential = AppJson::or_default(credential);
    let reviews = state.reviews.admin_list(&credential.password).await?;

    Ok(Json(AdminReviewList { success: true, reviews }))
}

/// 查询指定评价（包含完整邮箱）
#[utoipa::path(post,
    path = "/admin/reviews/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "Review id")),
    request_body = AdminCredential,
    responses(
        (status = 200, description = "The review", body = AdminReviewReply),
        (status = 401, description = "Wrong password", body = ApiMessage),
        (status = 404, description = "Review not found", body = ApiMessage)
    )
)]
#[instrument(skip(state, credential))]
pub async fn admin_get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    credential: Option<AppJson<AdminCredential>>,
) -> Result<Json<AdminReviewReply>, AppError> {
    let credential = AppJson::or_default(credential);
    let review = state.reviews.admin_get(&credential.password, &id).await?;

    Ok(Json(AdminReviewReply {
        success: true,
        message: None,
        review,
    }))
}

/// 删除评价
#[utoipa::path(delete,
    path = "/admin/reviews/{id}",
    tag = "admin",
    params(("id" = String, Path, description = "Review id")),
    request_body = AdminCredential,
    responses(
        (status = 200, description = "Deleted review", body = DeletedReviewReply),
        (status = 401, description = "Wrong password", body = ApiMessage),
        (status = 404, description = "Review not found", body = ApiMessage)
    )
)]
#[instrument(skip(state, credential))]
pub async fn admin_delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    credential: Option<AppJson<AdminCredential>>,
) -> Result<Json<DeletedReviewReply>, AppError> {
    debug!("🗑️ 请求删除评价 {}", id);

    let credential = AppJson::or_default(credential);
    let review = state.reviews.admin_delete(&credential.password, &id).await?;

    Ok(Json(DeletedReviewReply {
        success: true,
        message: "Review deleted".to_string(),
        deleted_review: review,
    }))
}

/// 审核通过或者撤回评价
#[utoipa::path(put,
    path = "/admin/reviews/{id}/approve",
    tag = "admin",
    params(("id" = String, Path, description = "Review id")),
    request_body = ApproveRequest,
    responses(
        (status = 200, description = "Updated review", body = AdminReviewReply),
        (status = 400, description = "Missing approved flag", body = ApiMessage),
        (status = 401, description = "Wrong password", body = ApiMessage),
        (status = 404, description = "Review not found", body = ApiMessage)
    )
)]
#[instrument(skip(state, request))]
pub async fn admin_approve_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Option<AppJson<ApproveRequest>>,
) -> Result<Json<AdminReviewReply>, AppError> {
    let request = AppJson::or_default(request);
    let review = state
        .reviews
        .admin_approve(&request.password, &id, request.approved)
        .await?;

    let message = if review.approved {
        "Review approved"
    } else {
        "Review hidden"
    };

    Ok(Json(AdminReviewReply {
        success: true,
        message: Some(message.to_string()),
        review,
    }))
}
