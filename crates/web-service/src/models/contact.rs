use crate::models::common::{first_message, non_blank, EMAIL_REGEX};
use crate::models::err::AppError;
use serde::Deserialize;
use shared_lib::ContactMessage;
use utoipa::ToSchema;
use validator::Validate;

/// 联系表单
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
pub struct ContactForm {
    #[schema(example = "Bob")]
    pub name: Option<String>,

    #[schema(example = "bob@example.com")]
    pub email: Option<String>,

    #[schema(example = "Collaboration")]
    pub subject: Option<String>,

    #[schema(example = "Hi, I'd like to work with you.")]
    pub message: Option<String>,
}

#[derive(Debug, Validate)]
struct ContactDraft {
    #[validate(length(min = 1, message = "All fields are required"))]
    name: String,

    #[validate(
        length(min = 1, message = "All fields are required"),
        regex(path = *EMAIL_REGEX, message = "Please provide a valid email address")
    )]
    email: String,

    #[validate(length(min = 1, message = "All fields are required"))]
    subject: String,

    #[validate(length(min = 1, message = "All fields are required"))]
    message: String,
}

impl ContactForm {
    /// 校验联系表单，所有字段都是必填
    pub fn into_contact_message(self) -> Result<ContactMessage, AppError> {
        let draft = ContactDraft {
            name: non_blank(self.name).unwrap_or_default(),
            email: non_blank(self.email).unwrap_or_default(),
            subject: non_blank(self.subject).unwrap_or_default(),
            // 正文保留原始换行，只去掉首尾空白
            message: non_blank(self.message).unwrap_or_default(),
        };

        draft
            .validate()
            .map_err(|errs| AppError::ValidationFailed(first_message(&errs, &["name", "email", "subject", "message"])))?;

        Ok(ContactMessage {
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
        })
    }
}
