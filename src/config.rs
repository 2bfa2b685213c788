use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ConfigError;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct EncoreConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    /// `true` connects through a hosted cloud project, `false` uses an API key.
    pub vertexai: bool,
    pub project: String,
    pub location: String,
    pub model_id: String,
    /// Name of the env var holding the key in direct mode.
    pub api_key_env: String,
    pub api_version: String,
    pub response_modalities: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    pub provider: String,
    pub corpus_path: String,
    pub endpoint: String,
    pub top_k: usize,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            host: "127.0.0.1".into(),
            port: 8765,
            log_level: "info".into(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            vertexai: true,
            project: String::new(),
            location: "us-central1".into(),
            model_id: "gemini-2.0-flash-exp".into(),
            api_key_env: "GOOGLE_API_KEY".into(),
            api_version: "v1alpha".into(),
            response_modalities: vec!["AUDIO".into()],
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        let corpus_path = default_encore_dir()
            .join("corpus.json")
            .to_string_lossy()
            .into_owned();
        Self {
            provider: "corpus".into(),
            corpus_path,
            endpoint: String::new(),
            top_k: 4,
            timeout_secs: 30,
        }
    }
}

/// How the model-serving client should connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Backend {
    /// Hosted cloud project.
    Vertex { project: String, location: String },
    /// Direct API with a key from the environment.
    ApiKey {
        #[serde(skip_serializing)]
        api_key: String,
        api_version: String,
    },
}

impl ModelConfig {
    /// Resolve the connection mode, reading the credential from the process
    /// environment in direct mode.
    pub fn backend(&self) -> Result<Backend, ConfigError> {
        self.backend_with(|name| std::env::var(name).ok())
    }

    /// Same as [`backend`](Self::backend) with an explicit env lookup.
    pub fn backend_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Backend, ConfigError> {
        if self.vertexai {
            if self.project.is_empty() {
                return Err(ConfigError::MissingProject);
            }
            Ok(Backend::Vertex {
                project: self.project.clone(),
                location: self.location.clone(),
            })
        } else {
            let api_key = lookup(&self.api_key_env)
                .filter(|k| !k.is_empty())
                .ok_or_else(|| ConfigError::MissingCredential(self.api_key_env.clone()))?;
            Ok(Backend::ApiKey {
                api_key,
                api_version: self.api_version.clone(),
            })
        }
    }
}

/// Returns `~/.encore/`
pub fn default_encore_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".encore")
}

/// Returns the default config file path: `~/.encore/config.toml`
pub fn default_config_path() -> PathBuf {
    default_encore_dir().join("config.toml")
}

impl EncoreConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_with(path, |name| std::env::var(name).ok())
    }

    /// Same as [`load_from`](Self::load_from) with an explicit env lookup.
    pub fn load_from_with(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            EncoreConfig::default()
        };

        config.apply_env_overrides(lookup);
        Ok(config)
    }

    /// Apply environment overrides: ENCORE_LOG_LEVEL, ENCORE_TRANSPORT,
    /// ENCORE_RETRIEVER_URL, VERTEXAI, GOOGLE_CLOUD_PROJECT.
    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("ENCORE_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Some(val) = lookup("ENCORE_TRANSPORT") {
            self.server.transport = val;
        }
        if let Some(val) = lookup("ENCORE_RETRIEVER_URL") {
            self.retrieval.endpoint = val;
            self.retrieval.provider = "http".into();
        }
        if let Some(val) = lookup("VERTEXAI") {
            self.model.vertexai = val.eq_ignore_ascii_case("true");
        }
        if let Some(val) = lookup("GOOGLE_CLOUD_PROJECT") {
            self.model.project = val;
        }
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
