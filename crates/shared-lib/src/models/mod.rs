pub mod config;
pub mod notification;

// 重新导出具体的类型
pub use config::{AppConfig, NotifyConfig};
pub use notification::{ContactMessage, Notification, NotificationKind};
