use crate::NotifyError;
use shared_lib::Notification;

/// 通知投递特征
///
/// 实现需要能在多个协程之间共享，因此要求 [`Send`] 和 [`Sync`]。
/// 使用 `async_trait` 是为了可以以 `Arc<dyn Notifier>` 的形式注入。
#[async_trait::async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// 投递一条通知
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;

    /// 投递方式名称，用于日志
    fn name(&self) -> &'static str;
}
