#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use database::InMemoryReviewRepository;
use notify_service::{LogNotifier, Notifier, NotifyError, Outbox};
use serde_json::Value;
use shared_lib::{AppConfig, Notification, NotifyConfig};
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::ServiceExt;
use web_service::routes::create_app_router;
use web_service::AppState;

pub const SECRET: &str = "s3cret";

/// 总是投递失败的通知实现
pub struct BrokenNotifier;

#[async_trait::async_trait]
impl Notifier for BrokenNotifier {
    async fn send(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Err(NotifyError::QueueClosed)
    }

    fn name(&self) -> &'static str {
        "broken"
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        admin_password: SECRET.to_string(),
        log_level: tracing::Level::INFO,
        notify: NotifyConfig {
            operator_email: "owner@example.com".to_string(),
            contact_recipients: vec!["owner@example.com".to_string()],
            webhook_url: None,
            queue_capacity: 16,
        },
    }
}

pub fn test_app_with(notifier: Arc<dyn Notifier>) -> (Router, mpsc::Receiver<Notification>) {
    let config = test_config();
    let (outbox, rx) = Outbox::channel(config.notify.queue_capacity);
    let state = AppState::new(&config, Arc::new(InMemoryReviewRepository::new()), outbox, notifier).unwrap();
    (create_app_router(state), rx)
}

pub fn test_app() -> (Router, mpsc::Receiver<Notification>) {
    test_app_with(Arc::new(LogNotifier))
}

/// 发送请求，返回状态码和json body（非json时为Null）
pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// 以原始字符串作为请求体发送
pub async fn call_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
