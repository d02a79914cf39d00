//! 评价仓库模块
//!
//! 这里定义存储操作的Repository层

pub mod review;
pub mod traits;

// 重新导出具体的类型
pub use review::InMemoryReviewRepository;
pub use traits::ReviewRepositoryTrait;
