//! 管理接口鉴权
//!
//! 鉴权只依赖 [`Authorizer`]，后续可以替换为哈希口令或者token方案，不需要修改路由逻辑。

/// 鉴权特征
pub trait Authorizer: Send + Sync + 'static {
    /// 校验调用方提供的凭证
    fn authorize(&self, credential: &str) -> bool;
}

/// 共享口令鉴权
///
/// 直接按值比较口令：没有哈希、没有常量时间比较、没有轮换，只适合个人站点的管理后台。
#[derive(Debug, Clone)]
pub struct SharedSecretAuthorizer {
    secret: String,
}

impl SharedSecretAuthorizer {
    pub fn new<S: Into<String>>(secret: S) -> Self {
        Self { secret: secret.into() }
    }
}

impl Authorizer for SharedSecretAuthorizer {
    fn authorize(&self, credential: &str) -> bool {
        // 未配置口令时拒绝所有请求
        !self.secret.is_empty() && credential == self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_by_value() {
        let auth = SharedSecretAuthorizer::new("s3cret");

        assert!(auth.authorize("s3cret"));
        assert!(!auth.authorize("S3CRET"));
        assert!(!auth.authorize(""));
    }

    #[test]
    fn empty_secret_authorizes_nothing() {
        let auth = SharedSecretAuthorizer::new("");
        assert!(!auth.authorize(""));
    }
}
