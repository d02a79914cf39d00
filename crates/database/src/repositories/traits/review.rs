//! 评价仓库 trait 定义
//!
//! 定义评价存储操作的抽象接口

use crate::models::review::{Review, ReviewCreate, ReviewFilter, ReviewStats};
use crate::DatabaseResult;

/// 评价仓库trait定义
///
/// 所有记录按插入顺序保存（最早的在前），支持：
/// - 追加新评价
/// - 列表查询（可只返回已审核的评价）
/// - 单条查询
/// - 修改审核状态
/// - 删除
#[async_trait::async_trait]
pub trait ReviewRepositoryTrait: Send + Sync + 'static {
    /// 追加新评价
    ///
    /// 分配新的唯一ID并写入创建时间，新评价的 `approved` 总是 `false`。
    ///
    /// # 错误
    /// 只有在输入数据不合法时（例如评分越界）返回 [`crate::DatabaseError::ValidationError`]
    async fn append(&self, review: ReviewCreate) -> DatabaseResult<Review>;

    /// 查询评价列表
    ///
    /// 返回的是调用时刻的快照，之后的修改不会影响已经返回的结果
    async fn list(&self, filter: ReviewFilter) -> DatabaseResult<Vec<Review>>;

    /// 根据 ID 获取评价
    async fn get(&self, id: i64) -> DatabaseResult<Review>;

    /// 修改审核状态
    ///
    /// # 返回值
    /// 返回修改后的评价
    async fn set_approved(&self, id: i64, approved: bool) -> DatabaseResult<Review>;

    /// 删除评价
    ///
    /// # 返回值
    /// 返回被删除的评价
    async fn remove(&self, id: i64) -> DatabaseResult<Review>;

    /// 统计评价数量
    async fn stats(&self) -> DatabaseResult<ReviewStats>;
}
