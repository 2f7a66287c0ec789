use async_trait::async_trait;
use crate::domain::entities::{NewRepository, Repository};
use crate::domain::value_objects::RepositoryId;
use crate::shared::result::Result;

/// 仓库记录仓储接口（Repository Pattern）
///
/// 每个方法都是对存储的一次原子操作。
#[async_trait]
pub trait RepositoryPort: Send + Sync {
    /// 分配新 ID 并插入记录，返回持久化后的完整记录
    async fn create(&self, repo: NewRepository) -> Result<Repository>;

    /// 根据 ID 查找记录；不存在时返回 None
    async fn find_by_id(&self, id: RepositoryId) -> Result<Option<Repository>>;

    /// 根据 owner/repo_name 查找记录（允许重复，按插入顺序返回）
    async fn find_by_owner_and_name(&self, owner: &str, repo_name: &str) -> Result<Vec<Repository>>;

    /// 写回已加载记录的 stars；记录已不存在时返回 RepositoryNotFound
    async fn save(&self, repo: &Repository) -> Result<()>;

    /// 删除记录；记录已不存在时返回 RepositoryNotFound
    async fn delete(&self, repo: &Repository) -> Result<()>;
}
