use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "warbler.toml",
    "config/warbler.toml",
    "crates/config/warbler.toml",
    "../warbler.toml",
    "../config/warbler.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub snapshot: SnapshotConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Where the read-only social graph snapshot is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    pub path: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("warbler-snapshot.json"),
        }
    }
}

/// Settings for reading the session user handed over by the upstream
/// request handler.
///
/// ```
/// use warbler_config::SessionConfig;
///
/// let session = SessionConfig::default();
/// assert_eq!(session.header, "x-session-user");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "SessionConfig::default_header")]
    pub header: String,
}

impl SessionConfig {
    fn default_header() -> String {
        "x-session-user".to_string()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            header: Self::default_header(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use warbler_config::load;
///
/// std::env::remove_var("WARBLER_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.http.address.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder()
        .set_default("http.address", defaults.http.address.clone())?
        .set_default("http.port", i64::from(defaults.http.port))?
        .set_default(
            "http.static_dir",
            defaults.http.static_dir.display().to_string(),
        )?
        .set_default(
            "snapshot.path",
            defaults.snapshot.path.display().to_string(),
        )?
        .set_default("session.header", defaults.session.header.clone())?;

    let environment_overrides = config::Environment::with_prefix("WARBLER").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("WARBLER_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via WARBLER_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let mut config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    config.session.header = config.session.header.trim().to_ascii_lowercase();
    if config.session.header.is_empty() {
        anyhow::bail!("session.header must not be empty");
    }

    debug!(?config, "loaded warbler configuration");
    Ok(config)
}
