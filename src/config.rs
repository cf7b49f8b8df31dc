use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while assembling the gateway configuration
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Spoonacular API key is not set")]
    MissingApiKey,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

/// Upstream recipe API (Spoonacular) connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String { "https://api.spoonacular.com/recipes".to_string() }
fn default_timeout_secs() -> u64 { 30 }

/// Fixed parameters attached to every find-by-ingredients call
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_number")]
    pub number: u32,
    #[serde(default = "default_ranking")]
    pub ranking: u8,
    #[serde(default = "default_ignore_pantry")]
    pub ignore_pantry: bool,
    #[serde(default)]
    pub empty_results: EmptyResultsPolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            number: default_number(),
            ranking: default_ranking(),
            ignore_pantry: default_ignore_pantry(),
            empty_results: EmptyResultsPolicy::default(),
        }
    }
}

fn default_number() -> u32 { 12 }
// Spoonacular ranking 2: fewest missing ingredients first
fn default_ranking() -> u8 { 2 }
fn default_ignore_pantry() -> bool { true }

/// How the gateway answers a search the upstream returned no recipes for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyResultsPolicy {
    /// `404 {"message": ...}`
    #[default]
    NotFound,
    /// `200 []`
    EmptyList,
}

impl Settings {
    /// Settings for a given upstream, everything else at defaults
    pub fn for_upstream(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            server: ServerSettings::default(),
            upstream: UpstreamSettings {
                base_url: base_url.into(),
                api_key: api_key.into(),
                timeout_secs: default_timeout_secs(),
            },
            search: SearchSettings::default(),
        }
    }

    /// Load configuration from files and environment variables
    ///
    /// Sources in order (later overrides earlier):
    /// 1. Default values in the structs
    /// 2. `config/default.toml`, then `config/local.toml`
    /// 3. Environment variables prefixed with `RECIPE__`, e.g. `RECIPE__SERVER__PORT`
    /// 4. The plain `PORT` and `SPOONACULAR_API_KEY` variables
    pub fn load() -> Result<Self, SettingsError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(prefixed_env());

        Self::load_with(builder, |name| std::env::var(name).ok())
    }

    /// Finish a builder, resolving the plain variables through `lookup`
    pub fn load_with<F>(
        builder: ConfigBuilder<DefaultState>,
        lookup: F,
    ) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let builder = apply_plain_env(builder, lookup)?;
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validated()
    }

    fn validated(mut self) -> Result<Self, SettingsError> {
        let key = self.upstream.api_key.trim();
        if key.is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        self.upstream.api_key = key.to_string();
        Ok(self)
    }

    /// First eight characters of the API key, for startup logging
    pub fn masked_api_key(&self) -> String {
        let prefix: String = self.upstream.api_key.chars().take(8).collect();
        format!("{}...", prefix)
    }
}

fn prefixed_env() -> Environment {
    Environment::with_prefix("RECIPE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Overlay `PORT` and `SPOONACULAR_API_KEY` when they are set
fn apply_plain_env<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid PORT {:?}: {}", port, e)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Some(api_key) = lookup("SPOONACULAR_API_KEY") {
        builder = builder.set_override("upstream.api_key", api_key)?;
    }

    Ok(builder)
}
