use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use crate::domain::entities::{NewRepository, Repository};
use crate::domain::value_objects::RepositoryId;
use crate::ports::repository::RepositoryPort;
use crate::shared::error::TrackerError;
use crate::shared::result::Result;

/// SQLite 仓库记录仓储实现
pub struct SqliteRepositoryRepository {
    pool: SqlitePool,
}

impl SqliteRepositoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_row(row: &SqliteRow) -> Result<Repository> {
        let raw_id: String = row.try_get("id")?;
        let id = RepositoryId::parse(&raw_id)
            .ok_or_else(|| TrackerError::Internal(format!("Corrupt repository id: {}", raw_id)))?;

        Ok(Repository {
            id,
            owner: row.try_get("owner")?,
            repo_name: row.try_get("repo_name")?,
            stars: row.try_get("stars")?,
        })
    }
}

#[async_trait]
impl RepositoryPort for SqliteRepositoryRepository {
    async fn create(&self, repo: NewRepository) -> Result<Repository> {
        let repo = repo.into_repository(RepositoryId::generate());

        let row = sqlx::query(
            r#"
            INSERT INTO repositories (id, owner, repo_name, stars)
            VALUES (?, ?, ?, ?)
            RETURNING id, owner, repo_name, stars
            "#,
        )
        .bind(repo.id.to_string())
        .bind(&repo.owner)
        .bind(&repo.repo_name)
        .bind(repo.stars)
        .fetch_one(&self.pool)
        .await?;

        Self::map_row(&row)
    }

    async fn find_by_id(&self, id: RepositoryId) -> Result<Option<Repository>> {
        let row = sqlx::query(
            r#"
            SELECT id, owner, repo_name, stars
            FROM repositories
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_by_owner_and_name(&self, owner: &str, repo_name: &str) -> Result<Vec<Repository>> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner, repo_name, stars
            FROM repositories
            WHERE owner = ? AND repo_name = ?
            ORDER BY rowid ASC
            "#,
        )
        .bind(owner)
        .bind(repo_name)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn save(&self, repo: &Repository) -> Result<()> {
        let result = sqlx::query("UPDATE repositories SET stars = ? WHERE id = ?")
            .bind(repo.stars)
            .bind(repo.id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TrackerError::RepositoryNotFound(repo.id.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, repo: &Repository) -> Result<()> {
        let result = sqlx::query("DELETE FROM repositories WHERE id = ?")
            .bind(repo.id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TrackerError::RepositoryNotFound(repo.id.to_string()));
        }
        Ok(())
    }
}
