//! 自定义提取器

use crate::models::err::AppError;
use axum::extract::{FromRequest, OptionalFromRequest, Request};
use serde::de::DeserializeOwned;

/// 和 [`axum::Json`] 一样，但是解析失败时返回 [`AppError`]，保证错误格式统一
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// 支持 `Option<AppJson<T>>`：
/// - 请求没有 `Content-Type` 时为 `None`（例如不带请求体的 DELETE）
/// - 声明了json但内容不合法时依然返回 [`AppError`]
impl<T, S> OptionalFromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let json = <axum::Json<T> as OptionalFromRequest<S>>::from_request(req, state).await?;
        Ok(json.map(|axum::Json(value)| AppJson(value)))
    }
}

impl<T: Default> AppJson<T> {
    /// 取出请求体，缺失时使用默认值
    pub fn or_default(body: Option<Self>) -> T {
        body.map(|AppJson(value)| value).unwrap_or_default()
    }
}
