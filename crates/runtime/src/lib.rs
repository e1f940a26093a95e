use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use warbler_config::AppConfig;
use warbler_gateway::GatewayState;
use warbler_social::Directory;

pub mod telemetry {
    use anyhow::Result;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

#[derive(Clone)]
pub struct PageServices {
    pub directory: Arc<Directory>,
}

impl PageServices {
    pub fn initialise(config: &AppConfig) -> Result<Self> {
        let path = &config.snapshot.path;
        let directory = Directory::load(path)
            .with_context(|| format!("failed to load snapshot from {}", path.display()))?;

        info!(
            path = %path.display(),
            users = directory.user_count(),
            messages = directory.message_count(),
            "snapshot ready"
        );

        Ok(Self {
            directory: Arc::new(directory),
        })
    }

    pub fn gateway_state(&self, config: &AppConfig) -> Result<GatewayState> {
        let state = GatewayState::new(self.directory.clone())
            .with_session_header(&config.session.header)
            .context("invalid session header")?
            .with_static_dir(&config.http.static_dir);
        Ok(state)
    }
}

pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
