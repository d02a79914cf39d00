//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务：
//! - 评价提交、审核、公开展示
//! - 联系表单转发
//! - 作品集静态内容

use crate::auth::{Authorizer, SharedSecretAuthorizer};
use crate::services::{ContactService, PortfolioCatalog, ReviewService};
use color_eyre::eyre::Context;
use color_eyre::Result;
use database::ReviewRepositoryTrait;
use notify_service::{Notifier, Outbox};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod auth;
pub mod extract;
pub mod models;
pub mod routes;
pub mod services;

/// 应用共享状态
///
/// 方便跨线程在多个axum handler中使用，克隆只是增加引用计数。
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<ReviewService>,
    pub contact: Arc<ContactService>,
    pub portfolio: Arc<PortfolioCatalog>,
}

impl AppState {
    /// 按照程序配置组装共享状态
    ///
    /// ## 参数
    /// - `repository`: 评价存储
    /// - `outbox`: 评价通知队列
    /// - `notifier`: 联系表单直接使用的投递方式
    pub fn new(
        config: &AppConfig,
        repository: Arc<dyn ReviewRepositoryTrait>,
        outbox: Outbox,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let authorizer: Arc<dyn Authorizer> = Arc::new(SharedSecretAuthorizer::new(config.admin_password.clone()));
        let portfolio = PortfolioCatalog::load().context("Parse bundled portfolio content")?;

        Ok(AppState {
            reviews: Arc::new(ReviewService::new(
                repository,
                authorizer,
                outbox,
                config.notify.operator_email.clone(),
            )),
            contact: Arc::new(ContactService::new(notifier, config.notify.contact_recipients.clone())),
            portfolio: Arc::new(portfolio),
        })
    }
}

/// 启动 Web 服务
pub async fn start_web_service(bind_addr: &str, shared_state: AppState, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", bind_addr);
    info!("🔧 API Health: http://{}/api/health", bind_addr);
    info!("📚 API Docs: http://{}/docs", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Bind web service to {bind_addr}"))?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被释放也视为关闭
            while !*shutdown_rx.borrow() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
