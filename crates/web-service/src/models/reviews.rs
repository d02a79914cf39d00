//! 评价相关的请求/返回对象

use crate::models::common::{first_message, non_blank, EMAIL_REGEX};
use crate::models::err::AppError;
use chrono::{DateTime, Utc};
use database::{Review, ReviewCreate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 管理列表中邮箱的占位符
pub const EMAIL_MASK: &str = "***@***";

/// 评分输入
///
/// 前端表单可能提交数字也可能提交字符串，统一在这里转换：
/// - 数字直接截断小数部分
/// - 字符串取开头的整数部分，例如 `"5 stars"` 为5，`"2.9"` 为2
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RatingInput {
    Number(f64),
    Text(String),
}

impl RatingInput {
    /// 不以整数开头的输入视为未填写
    pub fn to_rating(&self) -> Option<i64> {
        match self {
            RatingInput::Number(n) => n.is_finite().then(|| n.trunc() as i64),
            RatingInput::Text(s) => leading_integer(s),
        }
    }
}

/// 解析字符串开头的整数（允许前导空白和正负号）
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    // 位数过多时按越界处理，交给范围校验
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<i64>().map_or(i64::MAX, |n| sign * n))
}

/// 提交评价
///
/// 同时兼容旧版前端的字段名（`reviewerName` 等）
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    #[schema(example = "Alice")]
    #[serde(alias = "reviewerName")]
    pub name: Option<String>,

    #[schema(example = "Product Manager")]
    #[serde(alias = "reviewerPosition", alias = "projectType")]
    pub position: Option<String>,

    /// 1~5的整数
    #[schema(value_type = Option<i32>, example = 5)]
    #[serde(alias = "reviewRating")]
    pub rating: Option<RatingInput>,

    #[schema(example = "Great work")]
    #[serde(alias = "reviewText")]
    pub text: Option<String>,

    #[schema(example = "alice@example.com")]
    #[serde(alias = "reviewerEmail")]
    pub email: Option<String>,
}

/// 规范化之后待校验的评价
#[derive(Debug, Validate)]
struct ReviewDraft {
    #[validate(length(min = 1, message = "Name, rating, and review text are required"))]
    name: String,

    #[validate(
        required(message = "Name, rating, and review text are required"),
        range(min = 1, max = 5, message = "Rating must be between 1 and 5 stars")
    )]
    rating: Option<i64>,

    #[validate(length(min = 1, message = "Name, rating, and review text are required"))]
    text: String,

    #[validate(regex(path = *EMAIL_REGEX, message = "Please provide a valid email address"))]
    email: Option<String>,

    position: String,
}

impl ReviewSubmission {
    /// 规范化并校验用户提交的评价
    ///
    /// - 字符串去掉首尾空白，空字符串视为未填写
    /// - 邮箱为可选项，填写时必须符合格式
    pub fn into_review_create(self) -> Result<ReviewCreate, AppError> {
        let draft = ReviewDraft {
            name: non_blank(self.name).unwrap_or_default(),
            rating: self.rating.as_ref().and_then(RatingInput::to_rating),
            text: non_blank(self.text).unwrap_or_default(),
            email: non_blank(self.email),
            position: non_blank(self.position).unwrap_or_default(),
        };

        draft
            .validate()
            .map_err(|errs| AppError::ValidationFailed(first_message(&errs, &["name", "rating", "text", "email"])))?;

        // 上面已经保证了 rating 在 1..=5
        let rating = draft.rating.and_then(|r| u8::try_from(r).ok()).ok_or_else(|| {
            AppError::ValidationFailed("Rating must be between 1 and 5 stars".to_string())
        })?;

        Ok(ReviewCreate {
            name: draft.name,
            position: draft.position,
            rating,
            text: draft.text,
            email: draft.email.unwrap_or_default(),
        })
    }
}

/// 提交成功后回显给用户的评价，不包含ID和邮箱
#[derive(Deserialize, Debug, ToSchema, Serialize, PartialEq)]
pub struct SubmittedReview {
    pub name: String,
    pub position: String,
    pub rating: u8,
    pub text: String,
}

impl From<&Review> for SubmittedReview {
    fn from(review: &Review) -> Self {
        Self {
            name: review.name.clone(),
            position: review.position.clone(),
            rating: review.rating,
            text: review.text.clone(),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct SubmitReviewReply {
    pub success: bool,
    #[schema(example = "Thank you for your review! It will appear on the website after approval.")]
    pub message: String,
    pub review: SubmittedReview,
}

/// 公开展示的评价，永远不包含邮箱
#[derive(Deserialize, Debug, ToSchema, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicReview {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub rating: u8,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for PublicReview {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            name: review.name,
            position: review.position,
            rating: review.rating,
            text: review.text,
            created_at: review.created_at,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct PublicReviewList {
    pub success: bool,
    pub reviews: Vec<PublicReview>,
}

/// 管理接口返回的评价
#[derive(Deserialize, Debug, ToSchema, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminReview {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub rating: u8,
    pub text: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
}

impl AdminReview {
    /// 列表中非空邮箱替换为 [`EMAIL_MASK`]
    pub fn masked(review: Review) -> Self {
        let mut admin = Self::from(review);
        if !admin.email.is_empty() {
            admin.email = EMAIL_MASK.to_string();
        }
        admin
    }
}

impl From<Review> for AdminReview {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            name: review.name,
            position: review.position,
            rating: review.rating,
            text: review.text,
            email: review.email,
            created_at: review.created_at,
            approved: review.approved,
        }
    }
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct AdminReviewList {
    pub success: bool,
    pub reviews: Vec<AdminReview>,
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct AdminReviewReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub review: AdminReview,
}

#[derive(Deserialize, Debug, ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedReviewReply {
    pub success: bool,
    pub message: String,
    pub deleted_review: AdminReview,
}

/// 管理接口口令
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct AdminCredential {
    #[schema(example = "change-me")]
    #[serde(default)]
    pub password: String,
}

/// 修改审核状态
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct ApproveRequest {
    #[schema(example = "change-me")]
    #[serde(default)]
    pub password: String,

    #[schema(example = true)]
    pub approved: Option<bool>,
}
