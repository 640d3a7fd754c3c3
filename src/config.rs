use serde::Deserialize;
use std::path::Path;

/// Read when `CONFIG_FILE` is unset; built-in defaults apply if it does not exist.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products?limit=5";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Returned verbatim by GET /api/config.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "neon-blue".into()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Directory holding the front-end bundle.
    #[serde(default = "default_frontend_dir")]
    pub dir: String,
    /// Entry document (relative to `dir`) served for any unmatched path.
    #[serde(default = "default_frontend_index")]
    pub index: String,
}

fn default_frontend_dir() -> String {
    "frontend".into()
}

fn default_frontend_index() -> String {
    "index.html".into()
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dir: default_frontend_dir(),
            index: default_frontend_index(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Random,
    Catalog,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    /// Request timeout for the catalog fetch; unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.into()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            catalog_url: default_catalog_url(),
            timeout_secs: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) => {
                if Path::new(DEFAULT_CONFIG_PATH).exists() {
                    Self::load_from_path(DEFAULT_CONFIG_PATH)
                } else {
                    tracing::info!("{} not found, using built-in defaults", DEFAULT_CONFIG_PATH);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(!self.ui.theme.is_empty(), "ui.theme must be non-empty");
        anyhow::ensure!(!self.frontend.dir.is_empty(), "frontend.dir must be non-empty");
        anyhow::ensure!(
            !self.frontend.index.is_empty(),
            "frontend.index must be non-empty"
        );
        if self.source.kind == SourceKind::Catalog {
            anyhow::ensure!(
                self.source.catalog_url.starts_with("http://")
                    || self.source.catalog_url.starts_with("https://"),
                "source.catalog_url must be an http(s) URL, got {:?}",
                self.source.catalog_url
            );
        }
        if let Some(secs) = self.source.timeout_secs {
            anyhow::ensure!(secs > 0, "source.timeout_secs must be > 0, got {}", secs);
        }
        Ok(())
    }
}
