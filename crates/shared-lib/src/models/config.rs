use color_eyre::eyre::{eyre, Context};
use color_eyre::{Help, Result};
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// 通知队列默认容量
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// 通知配置
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// 新评价通知的接收地址
    ///
    /// 可通过环境变量 `OPERATOR_EMAIL` 来设置
    pub operator_email: String,

    /// 联系表单消息的接收地址列表
    ///
    /// 可通过环境变量 `CONTACT_RECIPIENTS` 设置（逗号分隔），未设置时使用 `operator_email`
    pub contact_recipients: Vec<String>,

    /// 邮件中转服务地址
    ///
    /// 设置了 `NOTIFY_WEBHOOK_URL` 时通知会以JSON形式POST到这个地址，否则只写日志
    pub webhook_url: Option<String>,

    /// 评价通知队列的容量，队列满时新的通知会被丢弃
    ///
    /// 可通过环境变量 `NOTIFY_QUEUE_CAPACITY` 来调整
    pub queue_capacity: usize,
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP监听地址，环境变量 `BIND_ADDR`
    pub bind_addr: String,

    /// 管理接口的共享口令，环境变量 `ADMIN_PASSWORD`
    pub admin_password: String,

    /// 日志级别，环境变量 `LOG_LEVEL`
    pub log_level: Level,

    /// 通知配置
    pub notify: NotifyConfig,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("Can not load .env file");
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 从任意键值来源构建配置
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let admin_password = non_empty("ADMIN_PASSWORD")
            .ok_or_else(|| eyre!("Can not load ADMIN_PASSWORD in environment"))
            .suggestion("设置 ADMIN_PASSWORD 环境变量")?;

        let operator_email = non_empty("OPERATOR_EMAIL")
            .ok_or_else(|| eyre!("Can not load OPERATOR_EMAIL in environment"))
            .suggestion("设置 OPERATOR_EMAIL 环境变量，用于接收新评价通知")?;

        let contact_recipients = non_empty("CONTACT_RECIPIENTS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty())
            .unwrap_or_else(|| vec![operator_email.clone()]);

        let log_level = match non_empty("LOG_LEVEL") {
            Some(raw) => Level::from_str(&raw)
                .map_err(|e| eyre!("Invalid LOG_LEVEL {raw}: {e}"))
                .suggestion("可选值: trace, debug, info, warn, error")?,
            None => Level::INFO,
        };

        Ok(AppConfig {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            admin_password,
            log_level,
            notify: NotifyConfig {
                operator_email,
                contact_recipients,
                webhook_url: non_empty("NOTIFY_WEBHOOK_URL"),
                queue_capacity: non_empty("NOTIFY_QUEUE_CAPACITY")
                    .map_or(DEFAULT_QUEUE_CAPACITY, |s| s.parse().unwrap_or(DEFAULT_QUEUE_CAPACITY))
                    .max(1),
            },
        })
    }
}
