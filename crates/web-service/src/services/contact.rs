//! 联系表单转发

use crate::models::contact::ContactForm;
use crate::models::err::AppError;
use notify_service::{messages, Notifier};
use std::sync::Arc;
use tracing::{error, info};

/// 联系表单服务
///
/// 和评价不同，消息投递本身就是请求的结果，所以这里直接等待投递完成，失败返回500。
pub struct ContactService {
    notifier: Arc<dyn Notifier>,
    recipients: Vec<String>,
}

impl ContactService {
    pub fn new(notifier: Arc<dyn Notifier>, recipients: Vec<String>) -> Self {
        Self { notifier, recipients }
    }

    pub async fn send(&self, form: ContactForm) -> Result<(), AppError> {
        let contact = form.into_contact_message()?;
        let notification = messages::contact_message(&self.recipients, &contact);

        if let Err(err) = self.notifier.send(&notification).await {
            error!("❌ 联系表单消息投递失败 ({}): {}", self.notifier.name(), err);
            return Err(err.into());
        }

        info!("📧 联系表单消息已转发: {}", contact.subject);
        Ok(())
    }
}
