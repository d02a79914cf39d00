//! 评价数据存储模块
//!
//! 这个模块提供了评价记录的存储抽象以及内存实现。
//!
//! 上层服务只依赖 [`ReviewRepositoryTrait`]，后续如果需要持久化（文件、嵌入式KV、SQL），
//! 只需要新增一个实现即可，不需要修改网关逻辑。

pub mod error;
pub mod models;
pub mod repositories;

pub use error::DatabaseError;
pub use models::review::{Review, ReviewCreate, ReviewFilter, ReviewStats, MAX_RATING, MIN_RATING};
pub use repositories::{review::InMemoryReviewRepository, traits::ReviewRepositoryTrait};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
