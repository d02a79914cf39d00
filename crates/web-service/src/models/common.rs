use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// 邮箱格式校验：`local@domain.tld`
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// 只包含提示信息的返回对象
///
/// 所有错误都以这种格式返回：`{"success": false, "message": "..."}`
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct ApiMessage {
    #[schema(example = false)]
    pub success: bool,

    #[schema(example = "Review not found")]
    pub message: String,
}

impl ApiMessage {
    pub fn ok<S: Into<String>>(message: S) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self { success: false, message: message.into() }
    }
}

/// 把去掉首尾空白后为空的字符串视为未填写
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// 从校验结果中取出一条给用户看的提示
///
/// [`ValidationErrors`] 内部是HashMap，顺序不固定。这里按照 `order` 给定的字段顺序，
/// 先报告缺失类错误（`required` / `length`），再报告格式类错误，保证提示信息稳定。
pub fn first_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let fields = errors.field_errors();
    let pick = |missing_only: bool| {
        order
            .iter()
            .filter_map(|field| fields.get(*field))
            .flat_map(|errs| errs.iter())
            .find(|err| !missing_only || matches!(&*err.code, "required" | "length"))
            .and_then(|err| err.message.as_ref())
            .map(|msg| msg.to_string())
    };

    pick(true).or_else(|| pick(false)).unwrap_or_else(|| errors.to_string())
}
