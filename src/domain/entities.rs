use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Owner, RepoName, RepositoryId};
use crate::shared::error::TrackerError;
use crate::shared::result::Result;

/// 仓库记录实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: RepositoryId,
    pub owner: String,
    pub repo_name: String,
    pub stars: i64,
}

impl Repository {
    /// 本地 +1，不会回源 GitHub；溢出时报错且不修改记录
    pub fn star(&mut self) -> Result<()> {
        self.stars = self.stars.checked_add(1).ok_or_else(|| {
            TrackerError::Internal(format!("Star count overflow for repository {}", self.id))
        })?;
        Ok(())
    }
}

/// 待持久化的仓库记录（ID 由存储层分配）
#[derive(Debug, Clone)]
pub struct NewRepository {
    pub owner: Owner,
    pub repo_name: RepoName,
    pub stars: i64,
}

impl NewRepository {
    pub fn new(owner: Owner, repo_name: RepoName, stars: i64) -> Self {
        Self {
            owner,
            repo_name,
            stars,
        }
    }

    /// 分配 ID，生成完整实体
    pub fn into_repository(self, id: RepositoryId) -> Repository {
        Repository {
            id,
            owner: self.owner.into_inner(),
            repo_name: self.repo_name.into_inner(),
            stars: self.stars,
        }
    }
}
