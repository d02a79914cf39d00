//! 通知队列与后台投递任务

use crate::traits::Notifier;
use crate::NotifyError;
use color_eyre::Result;
use shared_lib::Notification;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::watch::Receiver;
use tracing::{debug, error, info, warn};

/// 通知发件箱
///
/// 网关持有发送端，放入通知时不会等待，队列满或已关闭时直接返回错误，由调用方记录日志。
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: mpsc::Sender<Notification>,
}

impl Outbox {
    /// 创建发件箱以及对应的接收端
    pub fn channel(capacity: usize) -> (Outbox, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Outbox { tx }, rx)
    }

    /// 放入一条通知
    pub fn enqueue(&self, notification: Notification) -> Result<(), NotifyError> {
        self.tx.try_send(notification).map_err(|err| match err {
            TrySendError::Full(_) => NotifyError::QueueFull,
            TrySendError::Closed(_) => NotifyError::QueueClosed,
        })
    }
}

/// 启动通知投递任务
///
/// 持续消费队列直到收到关闭信号或者所有发送端都被释放。
/// 每条通知只投递一次，失败记录日志后丢弃。关闭时队列中尚未投递的通知会被丢弃。
pub async fn start_notification_worker(
    mut rx: mpsc::Receiver<Notification>,
    notifier: Arc<dyn Notifier>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    info!("📬 通知投递任务启动，投递方式: {}", notifier.name());

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        tokio::select! {
            changed = shutdown_rx.changed() => {
                // 发送端被释放也视为关闭
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
            next = rx.recv() => {
                match next {
                    Some(notification) => deliver(notifier.as_ref(), &notification).await,
                    None => {
                        debug!("所有发件箱都已释放");
                        break;
                    }
                }
            }
        }
    }

    let dropped = rx.len();
    if dropped > 0 {
        warn!("⚠️ 通知投递任务关闭，丢弃 {} 条未投递的通知", dropped);
    }
    info!("🛑 通知投递任务已停止");

    Ok(())
}

async fn deliver(notifier: &dyn Notifier, notification: &Notification) {
    match notifier.send(notification).await {
        Ok(()) => debug!("✅ 通知已投递: {}", notification.subject),
        Err(err) => error!("通知投递失败，已丢弃 [{}]: {}", notification.subject, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared_lib::NotificationKind;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::{watch, Mutex};

    /// 记录投递内容，subject为"fail"的通知会投递失败
    #[derive(Default)]
    struct RecordingNotifier {
        delivered: Mutex<Vec<String>>,
        attempts: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if notification.subject == "fail" {
                return Err(NotifyError::QueueClosed);
            }
            self.delivered.lock().await.push(notification.subject.clone());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn notification(subject: &str) -> Notification {
        Notification {
            kind: NotificationKind::ReviewSubmitted,
            to: vec!["owner@example.com".into()],
            reply_to: None,
            subject: subject.into(),
            body: String::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn worker_delivers_and_survives_failures() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (outbox, rx) = Outbox::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        outbox.enqueue(notification("first")).unwrap();
        outbox.enqueue(notification("fail")).unwrap();
        outbox.enqueue(notification("second")).unwrap();
        drop(outbox);

        start_notification_worker(rx, notifier.clone(), shutdown_rx).await.unwrap();

        assert_eq!(notifier.attempts.load(Ordering::SeqCst), 3);
        assert_eq!(*notifier.delivered.lock().await, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn worker_stops_on_shutdown_signal() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (_outbox, rx) = Outbox::channel(8);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(start_notification_worker(rx, notifier, shutdown_rx));
        shutdown_tx.send(true).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), handle).await;
        assert!(result.is_ok());
    }

    #[test]
    fn full_queue_rejects_without_blocking() {
        let (outbox, _rx) = Outbox::channel(1);

        outbox.enqueue(notification("one")).unwrap();
        assert!(matches!(outbox.enqueue(notification("two")), Err(NotifyError::QueueFull)));
    }

    #[test]
    fn closed_queue_is_reported() {
        let (outbox, rx) = Outbox::channel(1);
        drop(rx);

        assert!(matches!(outbox.enqueue(notification("one")), Err(NotifyError::QueueClosed)));
    }
}
