use crate::prelude::{eprintln, *};
use blogapi_core::store::EntityStore;
use std::sync::Arc;
use tokio::sync::RwLock;

pub async fn run_server(options: super::App, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Starting blog API on {addr}...");
    }

    let store = EntityStore::seeded();
    log::info!(
        "seeded store with {} authors and {} blogs",
        store.author_count(),
        store.blog_count()
    );

    let app_router = super::router(Arc::new(RwLock::new(store)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("listening on http://{addr}");
    if global.verbose {
        eprintln!("Blog API listening on http://{}", addr);
        eprintln!("Authors endpoint: http://{}/authors", addr);
        eprintln!("Blogs endpoint: http://{}/blogs/?authorId=<id>", addr);
    }

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
