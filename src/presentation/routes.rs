use axum::{Router, routing::{get, post}};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use crate::ports::metadata::MetadataPort;
use crate::ports::repository::RepositoryPort;
use crate::presentation::handlers;

/// 应用状态
pub struct AppContext {
    pub repository_store: Arc<dyn RepositoryPort>,
    pub metadata_client: Arc<dyn MetadataPort>,
}

/// 创建应用路由
pub fn create_app_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/repos", post(handlers::repository::create_repository))
        .route(
            "/repos/{repo_id}",
            get(handlers::repository::get_repository)
                .put(handlers::repository::star_repository)
                .delete(handlers::repository::delete_repository),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
