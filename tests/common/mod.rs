#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use starboard::infrastructure::sqlite::{self, repository_repo::SqliteRepositoryRepository};
use starboard::ports::metadata::{MetadataPort, RepoMetadata, UpstreamError};
use starboard::presentation::routes::{create_app_router, AppContext};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// 返回固定结果的元数据桩，记录调用次数
pub struct FakeMetadata {
    outcome: Result<i64, UpstreamError>,
    calls: AtomicUsize,
}

impl FakeMetadata {
    pub fn stars(stars: i64) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(stars),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(err: UpstreamError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(err),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataPort for FakeMetadata {
    async fn fetch_repository(
        &self,
        _owner: &str,
        _repo_name: &str,
    ) -> Result<RepoMetadata, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map(|stars| RepoMetadata { stargazers_count: stars })
    }
}

pub async fn temp_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let pool = sqlite::create_pool(&dir.path().join("starboard.db"), 4)
        .await
        .expect("failed to open sqlite pool");
    sqlite::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    (dir, pool)
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<SqliteRepositoryRepository>,
    pub metadata: Arc<FakeMetadata>,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new(metadata: Arc<FakeMetadata>) -> Self {
        let (dir, pool) = temp_pool().await;
        let store = Arc::new(SqliteRepositoryRepository::new(pool));
        let ctx = Arc::new(AppContext {
            repository_store: store.clone(),
            metadata_client: metadata.clone(),
        });
        Self {
            router: create_app_router(ctx),
            store,
            metadata,
            _dir: dir,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .expect("failed to build request");

        let resp = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        (status, bytes.to_vec())
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        let value = serde_json::from_slice(&bytes).expect("response body was not json");
        (status, value)
    }
}
