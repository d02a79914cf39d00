//! 服务层模块
//!
//! 包含业务逻辑的服务层实现，路由层只负责参数提取和返回值封装

pub mod contact;
pub mod portfolio;
pub mod review;

pub use contact::ContactService;
pub use portfolio::PortfolioCatalog;
pub use review::ReviewService;
