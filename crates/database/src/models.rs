//! 存储模型模块
//!
//! 这里定义存储层使用的结构体

pub mod review;

// 重新导出具体的模型
pub use review::{Review, ReviewCreate, ReviewFilter, ReviewStats};
