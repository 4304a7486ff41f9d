use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional YAML configuration file.
pub const CONFIG_ENV: &str = "TYPHOON_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub routing: RoutingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,
    /// Directory static files and scripts are resolved against.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            root: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Extensions (without the dot) served straight from disk.
    pub static_extensions: Vec<String>,
    /// Interpreters for dynamic scripts, tried in order.
    pub interpreters: Vec<InterpreterConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterpreterConfig {
    /// Matched as a substring of the script path, e.g. ".py".
    pub extension: String,
    pub program: String,
}

impl InterpreterConfig {
    pub fn new(extension: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            program: program.into(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        let static_extensions = ["css", "js", "gif", "ico", "jpg", "jpeg", "png", "html"]
            .into_iter()
            .map(String::from)
            .collect();

        let interpreters = vec![
            InterpreterConfig::new(".js", "node"),
            InterpreterConfig::new(".php", "php"),
            InterpreterConfig::new(".py", "python"),
            InterpreterConfig::new(".rb", "ruby"),
        ];

        Self {
            static_extensions,
            interpreters,
        }
    }
}

impl Config {
    /// Loads the configuration file named by `TYPHOON_CONFIG` (if any),
    /// then applies `LISTEN` and `TYPHOON_ROOT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        Ok(cfg.with_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path))?;
        Self::from_yaml(&raw).with_context(|| format!("parsing config file {}", path))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Applies environment-style overrides through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("LISTEN") {
            self.server.listen_addr = addr;
        }
        if let Some(root) = lookup("TYPHOON_ROOT") {
            self.server.root = PathBuf::from(root);
        }
        self
    }
}
