//! 评价网关
//!
//! 负责校验用户提交的评价、管理接口鉴权，并把存储层的结果转换为接口返回对象。
//!
//! 评价的生命周期：
//!
//! ```text
//! 提交 ──> 待审核 ──(approve true)──> 已公开
//!            ^                          │
//!            └─────(approve false)──────┘
//! 任意状态 ──(delete)──> 删除
//! ```

use crate::auth::Authorizer;
use crate::models::err::AppError;
use crate::models::reviews::{AdminReview, PublicReview, ReviewSubmission, SubmittedReview};
use database::{ReviewFilter, ReviewRepositoryTrait, ReviewStats};
use notify_service::{messages, Outbox};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReviewService {
    repository: Arc<dyn ReviewRepositoryTrait>,
    authorizer: Arc<dyn Authorizer>,
    outbox: Outbox,
    operator_email: String,
}

impl ReviewService {
    pub fn new(
        repository: Arc<dyn ReviewRepositoryTrait>,
        authorizer: Arc<dyn Authorizer>,
        outbox: Outbox,
        operator_email: String,
    ) -> Self {
        Self {
            repository,
            authorizer,
            outbox,
            operator_email,
        }
    }

    /// 提交评价
    ///
    /// 写入存储后尝试通知站长，通知只是放入队列，失败时记录日志，不影响提交结果。
    pub async fn submit(&self, submission: ReviewSubmission) -> Result<SubmittedReview, AppError> {
        let review = submission.into_review_create()?;
        let stored = self.repository.append(review).await?;
        info!("⭐ 收到新评价 {} ({} 星)，等待审核", stored.id, stored.rating);

        let notification = messages::review_submitted(&self.operator_email, &stored);
        if let Err(err) = self.outbox.enqueue(notification) {
            warn!("⚠️ 评价 {} 的通知未能放入队列: {}", stored.id, err);
        }

        Ok(SubmittedReview::from(&stored))
    }

    /// 公开展示的评价（仅已审核）
    pub async fn list_approved(&self) -> Result<Vec<PublicReview>, AppError> {
        let reviews = self.repository.list(ReviewFilter::ApprovedOnly).await?;
        Ok(reviews.into_iter().map(PublicReview::from).collect())
    }

    /// 管理列表，邮箱脱敏
    pub async fn admin_list(&self, credential: &str) -> Result<Vec<AdminReview>, AppError> {
        self.authorize(credential)?;

        let reviews = self.repository.list(ReviewFilter::All).await?;
        Ok(reviews.into_iter().map(AdminReview::masked).collect())
    }

    /// 查询单条评价，邮箱不脱敏
    pub async fn admin_get(&self, credential: &str, id: &str) -> Result<AdminReview, AppError> {
        self.authorize(credential)?;

        let review = self.repository.get(parse_id(id)?).await?;
        Ok(review.into())
    }

    /// 修改审核状态
    pub async fn admin_approve(&self, credential: &str, id: &str, approved: Option<bool>) -> Result<AdminReview, AppError> {
        self.authorize(credential)?;

        let id = parse_id(id)?;
        let approved =
            approved.ok_or_else(|| AppError::ValidationFailed("Field `approved` must be true or false".to_string()))?;

        let review = self.repository.set_approved(id, approved).await?;
        info!("✅ 评价 {} 审核状态修改为 {}", id, approved);
        Ok(review.into())
    }

    /// 删除评价
    pub async fn admin_delete(&self, credential: &str, id: &str) -> Result<AdminReview, AppError> {
        self.authorize(credential)?;

        let review = self.repository.remove(parse_id(id)?).await?;
        info!("🗑️ 评价 {} 已删除", review.id);
        Ok(review.into())
    }

    pub async fn stats(&self) -> Result<ReviewStats, AppError> {
        Ok(self.repository.stats().await?)
    }

    fn authorize(&self, credential: &str) -> Result<(), AppError> {
        if self.authorizer.authorize(credential) {
            Ok(())
        } else {
            warn!("🔒 管理口令校验失败");
            Err(AppError::Unauthorized)
        }
    }
}

/// 非数字的ID不可能存在，直接按不存在处理
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim().parse().map_err(|_| AppError::review_not_found())
}
