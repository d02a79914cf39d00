//! 通知服务模块
//!
//! 负责把通知消息投递给站长，和评价提交的主流程解耦：
//!
//! - 网关通过 [`Outbox`] 把通知放入进程内队列，放入操作不会阻塞也不会失败请求
//! - [`start_notification_worker`] 在后台消费队列，通过 [`Notifier`] 投递
//! - 投递失败只记录日志，不重试
//!
//! 联系表单的消息本身就是请求的结果，因此网关会直接调用 [`Notifier::send`] 等待投递结果。
//!
//! 用户一般这样使用：
//!
//! ```rust,ignore
//! let notifier = build_notifier(&config.notify);
//! let (outbox, rx) = Outbox::channel(config.notify.queue_capacity);
//!
//! try_join!(
//!     start_notification_worker(rx, Arc::clone(&notifier), shutdown_rx.clone()),
//!     start_web_service(...),
//! )?;
//! ```

pub mod error;
pub mod messages;
pub mod notifiers;
pub mod traits;
pub mod worker;

pub use error::NotifyError;
pub use notifiers::{build_notifier, LogNotifier, WebhookNotifier};
pub use traits::Notifier;
pub use worker::{start_notification_worker, Outbox};
