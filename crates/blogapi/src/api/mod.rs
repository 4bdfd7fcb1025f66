mod cli;
mod handlers;
mod server;

pub use cli::App;

use crate::prelude::*;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use blogapi_core::store::EntityStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

/// Store shared by every request handler
///
/// The lock is held for the whole of each operation, so id assignment and
/// read-modify-write updates never interleave.
pub type SharedStore = Arc<RwLock<EntityStore>>;

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    server::run_server(app, global).await
}

/// Build the API router over `store`
pub fn router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/authors", get(handlers::list_authors))
        .route("/author", post(handlers::create_author))
        .route("/author/{author_id}", delete(handlers::delete_author))
        .route("/blogs", get(handlers::list_blogs_by_author))
        .route("/blogs/", get(handlers::list_blogs_by_author))
        .route(
            "/blog",
            post(handlers::create_blog).put(handlers::replace_blog),
        )
        .route(
            "/blog/",
            post(handlers::create_blog).put(handlers::replace_blog),
        )
        .route("/blog/like", patch(handlers::like_blog))
        .route("/blog/dislike", patch(handlers::dislike_blog))
        .route(
            "/blog/{blog_id}",
            patch(handlers::patch_blog).delete(handlers::delete_blog),
        )
        .layer(cors)
        .with_state(store)
}
