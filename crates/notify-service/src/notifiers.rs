//! 通知投递实现
//!
//! - [`LogNotifier`]: 只把通知写入日志，未配置中转服务时使用
//! - [`WebhookNotifier`]: 把通知以JSON形式POST到邮件中转服务

use crate::traits::Notifier;
use crate::NotifyError;
use shared_lib::{Notification, NotifyConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// 中转请求超时时间
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// 根据配置选择投递方式
pub fn build_notifier(config: &NotifyConfig) -> Arc<dyn Notifier> {
    match &config.webhook_url {
        Some(url) => {
            info!("📮 通知将投递到中转服务 {}", url);
            Arc::new(WebhookNotifier::new(url.clone()))
        }
        None => {
            info!("📝 未配置 NOTIFY_WEBHOOK_URL，通知只写入日志");
            Arc::new(LogNotifier)
        }
    }
}

/// 日志通知
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!(
            kind = ?notification.kind,
            to = ?notification.to,
            reply_to = ?notification.reply_to,
            "📧 {}\n{}",
            notification.subject,
            notification.body
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// 邮件中转通知
///
/// 实际的邮件发送由中转服务完成，这里只关心请求是否被接受（2xx）
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String) -> Self {
        // 只有TLS后端初始化失败时才会出错，这时退回默认客户端（没有超时）
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, url }
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        debug!("📮 投递通知到 {}: {}", self.url, notification.subject);

        let response = self.client.post(&self.url).json(notification).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status));
        }

        debug!("✅ 通知投递成功: {}", notification.subject);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}
