use async_trait::async_trait;
use serde::Deserialize;

/// 外部代码托管服务的仓库元数据接口
#[async_trait]
pub trait MetadataPort: Send + Sync {
    /// 获取 owner/repo 的元数据，单次请求，不重试
    async fn fetch_repository(
        &self,
        owner: &str,
        repo_name: &str,
    ) -> std::result::Result<RepoMetadata, UpstreamError>;
}

/// GitHub 仓库元数据（只保留用到的字段）
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    pub stargazers_count: i64,
}

/// 外部调用失败的种类
///
/// 对 HTTP 调用方统一表现为 400，种类只体现在日志中。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// 网络不可达、超时等传输层失败
    #[error("External service unavailable")]
    ServiceUnavailable,

    /// 返回了非 200 状态码
    #[error("GitHub repository not found")]
    NotFound { status: u16 },

    /// 200 但响应体缺少可用的 stargazers_count
    #[error("Invalid response from GitHub")]
    InvalidResponse,
}
