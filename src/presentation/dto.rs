use serde::{Deserialize, Serialize};
use crate::domain::entities::Repository;
use crate::domain::value_objects::{Owner, RepoName};
use crate::shared::error::TrackerError;
use crate::shared::result::Result;

/// 创建请求体
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRepositoryRequest {
    pub owner: String,
    pub repo_name: String,
}

impl CreateRepositoryRequest {
    /// 校验长度，转换为值对象
    pub fn validate(self) -> Result<(Owner, RepoName)> {
        let owner = Owner::new(self.owner).map_err(TrackerError::Validation)?;
        let repo_name = RepoName::new(self.repo_name).map_err(TrackerError::Validation)?;
        Ok((owner, repo_name))
    }
}

/// 仓库记录 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDto {
    pub id: String,
    pub owner: String,
    pub repo_name: String,
    pub stars: i64,
}

impl From<Repository> for RepositoryDto {
    fn from(repo: Repository) -> Self {
        Self {
            id: repo.id.to_string(),
            owner: repo.owner,
            repo_name: repo.repo_name,
            stars: repo.stars,
        }
    }
}
