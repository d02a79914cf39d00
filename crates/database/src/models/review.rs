//! 评价存储模型
//!
//! 定义评价相关的存储结构体

use chrono::{DateTime, Utc};

/// 评分下限（包含）
pub const MIN_RATING: u8 = 1;

/// 评分上限（包含）
pub const MAX_RATING: u8 = 5;

/// 评价记录
///
/// 创建后只有 `approved` 字段可以被修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub rating: u8,
    pub text: String,
    /// 未提供时为空字符串
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub approved: bool,
}

/// 评价创建参数
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub name: String,
    pub position: String,
    pub rating: u8,
    pub text: String,
    pub email: String,
}

/// 评价列表过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFilter {
    /// 所有评价
    #[default]
    All,
    /// 仅已审核通过的评价
    ApprovedOnly,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::ApprovedOnly => review.approved,
        }
    }
}

/// 评价数量统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
}
