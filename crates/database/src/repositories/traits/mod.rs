//! 评价仓库 trait 定义
//!
//! ## Trait 约束说明 📚
//!
//! 仓库实例会被包装成 `Arc<dyn ReviewRepositoryTrait>` 注入到网关服务中，
//! 并在多个 axum handler 之间共享：
//!
//! - `Send` / `Sync`：不同的请求可能在不同线程处理，仓库需要能跨线程共享
//! - `'static`：作为应用服务长期运行，不依赖短期引用
//!
//! ## 一致性要求
//!
//! - 写操作（`append` / `set_approved` / `remove`）之间必须互斥，要么完整生效要么不生效
//! - 读操作（`list` / `get`）可以并发，但必须看到一致的快照，不能读到写了一半的记录

pub mod review;

// 重新导出
pub use review::ReviewRepositoryTrait;
