use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DatabaseError {
    /// 指定的评价不存在
    #[error("review {0} not found")]
    NotFound(i64),

    /// 写入的数据不合法
    ///
    /// 调用方需要在写入前完成校验，这里只是最后一道检查
    #[error("invalid review data: {0}")]
    ValidationError(String),
}

impl DatabaseError {
    /// 创建数据校验错误
    pub fn validation<T: ToString>(msg: T) -> Self {
        Self::ValidationError(msg.to_string())
    }
}
