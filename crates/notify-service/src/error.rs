use thiserror::Error;

/// 通知投递错误类型
#[derive(Error, Debug)]
pub enum NotifyError {
    /// 请求中转服务失败（网络、超时等）
    #[error("❌ 通知中转请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    /// 中转服务返回了非2xx状态码
    #[error("❌ 通知中转服务拒绝请求: {0}")]
    Rejected(reqwest::StatusCode),

    /// 通知队列已满
    #[error("❌ 通知队列已满")]
    QueueFull,

    /// 通知队列已关闭（后台任务已退出）
    #[error("❌ 通知队列已关闭")]
    QueueClosed,
}
