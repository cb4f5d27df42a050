use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The original deployment listened on 5000; kept as the default.
const DEFAULT_PORT: u16 = 5000;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(".tickd"))
        .unwrap_or_else(|| PathBuf::from(".tickd"))
}

/// `{data_dir}/config.toml` — all fields are optional overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TomlConfig {
    port: Option<u16>,
    bind_address: Option<String>,
    log: Option<String>,
    api_url: Option<String>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let raw = std::fs::read_to_string(&path).ok()?;
    match toml::from_str(&raw) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            // Config resolves before logging is initialized, so report
            // straight to stderr rather than through tracing.
            eprintln!(
                "warn: failed to parse '{}': {e} — using defaults",
                path.display()
            );
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the task API listens on.
    pub port: u16,
    /// Bind address (default 127.0.0.1; use 0.0.0.0 for LAN access).
    pub bind_address: String,
    /// Directory holding the SQLite database and config.toml.
    pub data_dir: PathBuf,
    /// Log level / EnvFilter directive.
    pub log: String,
    /// Base URL the CLI client subcommands talk to.
    pub api_url: String,
}

impl Config {
    /// Resolve configuration with CLI/env arguments taking precedence over
    /// `{data_dir}/config.toml`, which takes precedence over defaults.
    pub fn new(
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        log: Option<String>,
        bind_address: Option<String>,
        api_url: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let toml = load_toml(&data_dir).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let bind_address = bind_address
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());
        let api_url = api_url
            .or(toml.api_url)
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}"));

        Self {
            port,
            bind_address,
            data_dir,
            log,
            api_url,
        }
    }
}
