use crate::extract::AppJson;
use crate::models::common::ApiMessage;
use crate::models::contact::ContactForm;
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use tracing::instrument;

/// 联系表单
///
/// 所有字段必填，消息会转发给站长，转发失败返回500。
#[utoipa::path(post,
    path = "/contact",
    tag = "contact",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Message relayed", body = ApiMessage),
        (status = 400, description = "Invalid form", body = ApiMessage),
        (status = 500, description = "Relay failed", body = ApiMessage)
    )
)]
#[instrument(skip_all)]
pub async fn send_contact(
    State(state): State<AppState>,
    AppJson(form): AppJson<ContactForm>,
) -> Result<Json<ApiMessage>, AppError> {
    state.contact.send(form).await?;

    Ok(Json(ApiMessage::ok("Message sent successfully! I will get back to you soon.")))
}
