//! 评价仓库
//!
//! 评价的内存实现，所有数据只在进程生命周期内有效，重启后丢失。

use crate::models::review::{Review, ReviewCreate, ReviewFilter, ReviewStats, MAX_RATING, MIN_RATING};
use crate::repositories::traits::ReviewRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct ReviewTable {
    /// 按插入顺序保存
    reviews: Vec<Review>,
    /// 最近一次分配的ID，保证ID严格递增
    last_id: i64,
}

impl ReviewTable {
    /// 以毫秒时间戳作为ID，同一毫秒内（或时钟回拨）则在上一个ID基础上加一
    fn next_id(&mut self, now_millis: i64) -> i64 {
        let id = now_millis.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    fn position(&self, id: i64) -> DatabaseResult<usize> {
        self.reviews
            .iter()
            .position(|r| r.id == id)
            .ok_or(DatabaseError::NotFound(id))
    }
}

/// 内存评价仓库
///
/// 使用一个 [`RwLock`] 保护整个集合：
/// - 写操作持有写锁直到完成，相互之间串行执行
/// - 读操作持有读锁并克隆数据，返回一致的快照
#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    table: RwLock<ReviewTable>,
}

impl InMemoryReviewRepository {
    /// 创建新的评价仓库实例
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ReviewRepositoryTrait for InMemoryReviewRepository {
    async fn append(&self, review: ReviewCreate) -> DatabaseResult<Review> {
        debug!("📝 追加评价: {} ({} 星)", review.name, review.rating);

        if !(MIN_RATING..=MAX_RATING).contains(&review.rating) {
            return Err(DatabaseError::validation(format!(
                "rating {} is outside {MIN_RATING}..={MAX_RATING}",
                review.rating
            )));
        }
        if review.name.is_empty() || review.text.is_empty() {
            return Err(DatabaseError::validation("name and text must not be empty"));
        }

        // 在写锁内取时间，保证创建时间和ID的顺序一致
        let mut table = self.table.write().await;
        let created_at = Utc::now();
        let id = table.next_id(created_at.timestamp_millis());

        let record = Review {
            id,
            name: review.name,
            position: review.position,
            rating: review.rating,
            text: review.text,
            email: review.email,
            created_at,
            approved: false,
        };
        table.reviews.push(record.clone());

        debug!("✅ 评价写入成功: {}", id);
        Ok(record)
    }

    async fn list(&self, filter: ReviewFilter) -> DatabaseResult<Vec<Review>> {
        let table = self.table.read().await;
        Ok(table.reviews.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    async fn get(&self, id: i64) -> DatabaseResult<Review> {
        let table = self.table.read().await;
        let index = table.position(id)?;
        Ok(table.reviews[index].clone())
    }

    async fn set_approved(&self, id: i64, approved: bool) -> DatabaseResult<Review> {
        debug!("🔄 修改评价 {} 审核状态: {}", id, approved);

        let mut table = self.table.write().await;
        let index = table.position(id)?;
        let review = &mut table.reviews[index];
        review.approved = approved;
        Ok(review.clone())
    }

    async fn remove(&self, id: i64) -> DatabaseResult<Review> {
        debug!("🗑️ 删除评价: {}", id);

        let mut table = self.table.write().await;
        let index = table.position(id)?;
        // 使用remove而不是swap_remove，保持插入顺序
        Ok(table.reviews.remove(index))
    }

    async fn stats(&self) -> DatabaseResult<ReviewStats> {
        let table = self.table.read().await;
        let approved = table.reviews.iter().filter(|r| r.approved).count();
        Ok(ReviewStats {
            total: table.reviews.len(),
            approved,
            pending: table.reviews.len() - approved,
        })
    }
}
