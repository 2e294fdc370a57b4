// Configuration module
// Startup configuration with file/env layering, plus the shared request state

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Static file configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Document root override; defaults to the executable's directory
    #[serde(default)]
    pub root: Option<String>,
    pub index_files: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration from the optional "config.toml" next to the
    /// executable, so invocation directory does not change what is loaded
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = exe_directory()
            .map(|dir| dir.join("config"))
            .map_err(|e| {
                config::ConfigError::Message(format!("cannot locate executable directory: {e}"))
            })?;
        Self::load_from(&config_path.to_string_lossy())
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; `DASHBOARD_*` environment variables layer on top,
    /// and the defaults below reproduce the fixed dashboard contract
    /// (all interfaces, port 8080, access log on).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DASHBOARD"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default(
                "files.index_files",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the document root: the configured path, or the directory
    /// containing the executable when none is set.
    ///
    /// Canonicalized so the traversal check in the handler has a stable
    /// prefix to compare against. The caller's working directory plays no
    /// part in resolution.
    pub fn resolve_document_root(&self) -> std::io::Result<PathBuf> {
        let root = match &self.files.root {
            Some(path) => PathBuf::from(path),
            None => exe_directory()?,
        };
        root.canonicalize()
    }
}

fn exe_directory() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })
}

/// Shared per-request state: configuration plus the resolved document root.
///
/// The root is fixed at startup and read-only afterwards; requests share it
/// through an `Arc` and never mutate it.
pub struct AppState {
    pub config: Config,
    pub document_root: PathBuf,
}

impl AppState {
    pub const fn new(config: Config, document_root: PathBuf) -> Self {
        Self {
            config,
            document_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_contract() {
        let config = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.logging.access_log);
        assert_eq!(config.files.index_files, vec!["index.html", "index.htm"]);
        assert!(config.files.root.is_none());
    }

    #[test]
    fn configured_root_wins_over_exe_directory() {
        let dir = std::env::temp_dir().join("dashboard-config-root-test");
        std::fs::create_dir_all(&dir).expect("create fixture dir");

        let mut config = Config::load_from("no-such-config-file").expect("defaults should load");
        config.files.root = Some(dir.to_string_lossy().into_owned());

        let resolved = config.resolve_document_root().expect("resolve root");
        assert_eq!(resolved, dir.canonicalize().expect("canonicalize fixture"));
    }

    #[test]
    fn load_resolves_beside_the_executable() {
        // No config.toml ships next to the test binary, so this exercises
        // the exe-relative lookup and still yields the defaults
        let config = Config::load().expect("load should fall back to defaults");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn default_root_is_exe_directory() {
        let config = Config::load_from("no-such-config-file").expect("defaults should load");
        let resolved = config.resolve_document_root().expect("resolve root");
        assert!(resolved.is_dir());
    }
}
