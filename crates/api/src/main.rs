use std::sync::Arc;

use anyhow::Context;

use revsync_api::app::services::AppServices;
use revsync_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    revsync_observability::init(config.log_format);

    if config.insecure_jwt_secret {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
    }

    let services = Arc::new(AppServices::from_config(&config).context("failed to provision stores")?);
    let app = revsync_api::app::build_app(config.jwt_secret.clone(), services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        depth = ?config.syndication_depth,
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
