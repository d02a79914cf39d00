use color_eyre::eyre::Context;
use color_eyre::Result;
use database::{InMemoryReviewRepository, ReviewRepositoryTrait};
use notify_service::{build_notifier, start_notification_worker, Outbox};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::try_join;
use tracing::{info, warn};
use web_service::{start_web_service, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    // 评价只保存在内存中，进程重启后丢失
    let repository: Arc<dyn ReviewRepositoryTrait> = Arc::new(InMemoryReviewRepository::new());
    info!("🗄️ 评价存储初始化完成（内存模式）");

    let notifier = build_notifier(&config.notify);
    let (outbox, outbox_rx) = Outbox::channel(config.notify.queue_capacity);

    let shared_state = AppState::new(&config, repository, outbox, Arc::clone(&notifier))?;

    // 收到 Ctrl-C 后通知所有任务退出
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("⚠️ 监听退出信号失败，只能强制结束进程: {}", err);
            // 保留发送端，避免任务误以为收到了关闭信号
            std::future::pending::<()>().await;
        }
        info!("🛑 收到退出信号");
        let _ = shutdown_tx.send(true);
    });

    try_join!(
        start_notification_worker(outbox_rx, notifier, shutdown_rx.clone()),
        start_web_service(&config.bind_addr, shared_state, shutdown_rx),
    )
    .context("Run portfolio backend")?;

    info!("👋 服务已退出");
    Ok(())
}
