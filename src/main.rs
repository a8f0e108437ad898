use anyhow::Result;
use axum::Router;
use std::{io::ErrorKind, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use s3_file_gateway::{
    config, routes,
    services::{gateway_service::GatewayService, s3_store::S3ObjectStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    // --- Load .env, then logging setup ---
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env_and_args()?;

    tracing::info!(
        bucket = %cfg.bucket,
        region = %cfg.region,
        app_env = %cfg.app_env,
        "Starting s3-file-gateway"
    );

    // --- Initialize the S3 client and core service ---
    let store = Arc::new(S3ObjectStore::new(&cfg).await);
    let service = GatewayService::new(
        store,
        cfg.bucket.clone(),
        cfg.region.clone(),
        cfg.public_read_uploads,
    );

    // --- Build router ---
    let app: Router = routes::routes::routes().with_state(service);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
