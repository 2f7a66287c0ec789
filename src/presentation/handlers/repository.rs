use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::info;
use crate::domain::entities::{NewRepository, Repository};
use crate::domain::value_objects::RepositoryId;
use crate::presentation::dto::{CreateRepositoryRequest, RepositoryDto};
use crate::presentation::routes::AppContext;
use crate::shared::error::TrackerError;
use crate::shared::result::Result;

/// 按路径参数加载记录；非法 UUID 与不存在同样视为 404
async fn load(ctx: &AppContext, repo_id: &str) -> Result<Repository> {
    let id = RepositoryId::parse(repo_id)
        .ok_or_else(|| TrackerError::RepositoryNotFound(repo_id.to_string()))?;

    ctx.repository_store
        .find_by_id(id)
        .await?
        .ok_or_else(|| TrackerError::RepositoryNotFound(repo_id.to_string()))
}

/// API: 创建记录（先向 GitHub 查询 star 数）
pub async fn create_repository(
    State(ctx): State<Arc<AppContext>>,
    payload: std::result::Result<Json<CreateRepositoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RepositoryDto>)> {
    let Json(payload) = payload.map_err(|e| TrackerError::Validation(e.body_text()))?;
    let (owner, repo_name) = payload.validate()?;

    info!(%owner, %repo_name, "Creating repository entry");

    let metadata = ctx
        .metadata_client
        .fetch_repository(owner.as_str(), repo_name.as_str())
        .await?;

    let repo = ctx
        .repository_store
        .create(NewRepository::new(owner, repo_name, metadata.stargazers_count))
        .await?;

    info!(id = %repo.id, stars = repo.stars, "Repository entry created");

    Ok((StatusCode::CREATED, Json(repo.into())))
}

/// API: 读取记录
pub async fn get_repository(
    State(ctx): State<Arc<AppContext>>,
    Path(repo_id): Path<String>,
) -> Result<Json<RepositoryDto>> {
    let repo = load(&ctx, &repo_id).await?;
    Ok(Json(repo.into()))
}

/// API: stars 固定 +1（不回源 GitHub）
pub async fn star_repository(
    State(ctx): State<Arc<AppContext>>,
    Path(repo_id): Path<String>,
) -> Result<Json<RepositoryDto>> {
    let mut repo = load(&ctx, &repo_id).await?;
    repo.star()?;
    ctx.repository_store.save(&repo).await?;

    info!(id = %repo.id, stars = repo.stars, "Repository starred");

    Ok(Json(repo.into()))
}

/// API: 删除记录
pub async fn delete_repository(
    State(ctx): State<Arc<AppContext>>,
    Path(repo_id): Path<String>,
) -> Result<StatusCode> {
    let repo = load(&ctx, &repo_id).await?;
    ctx.repository_store.delete(&repo).await?;

    info!(id = %repo.id, "Repository entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
