use std::fmt;
use std::sync::Arc;

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

use crate::presentation::config::{keybindings, styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Environment variable consulted when no key is configured.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Bearer token kept out of `Debug` output and logs.
#[derive(Clone)]
pub struct ApiKey(Arc<SecretString>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Arc::new(SecretString::from(key.into())))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ApiKey::new)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TmdbConfig {
    pub base_url: String,
    pub image_base_url: String,
    #[serde(default)]
    pub api_key: Option<ApiKey>,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            api_key: None,
        }
    }
}

/// Location of the shared search-count collection.
///
/// Trending is optional: without a project, database and collection the
/// panel stays empty and searches are not counted.
#[derive(Clone, Debug, Deserialize)]
pub struct TrendingConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub database_id: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<ApiKey>,
    #[serde(default = "default_trending_limit")]
    pub limit: u32,
}

fn default_trending_limit() -> u32 {
    5
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            project_id: None,
            database_id: None,
            collection_id: None,
            api_key: None,
            limit: default_trending_limit(),
        }
    }
}

impl TrendingConfig {
    pub fn is_configured(&self) -> bool {
        [
            &self.endpoint,
            &self.project_id,
            &self.database_id,
            &self.collection_id,
        ]
        .iter()
        .all(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

fn default_debounce_ms() -> u64 {
    500
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub trending: TrendingConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            tmdb: TmdbConfig::default(),
            trending: TrendingConfig::default(),
            keybindings: keybindings::KeyBindings::default(),
            styles: styles::Styles::default(),
        }
    }
}

impl Config {
    /// Load defaults, then user config files, then `MOVIESCOUT_*` variables.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = utils::get_config_dir();
        let mut builder = Self::base_builder()?;

        let config_files = [
            ("config.json5", FileFormat::Json5),
            ("config.json", FileFormat::Json),
            ("config.yaml", FileFormat::Yaml),
            ("config.toml", FileFormat::Toml),
            ("config.ini", FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(utils::paths::PROJECT_NAME.as_str())
                .prefix_separator("_")
                .separator("__"),
        );

        Self::finish(builder, std::env::var(API_KEY_ENV).ok())
    }

    /// Defaults overlaid with a single json5 document; no files, no environment.
    pub fn from_json5(overrides: &str) -> Result<Self, ConfigError> {
        let builder = Self::base_builder()?.add_source(File::from_str(overrides, FileFormat::Json5));
        Self::finish(builder, None)
    }

    fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(config::Config::builder().add_source(File::from_str(CONFIG, FileFormat::Json5)))
    }

    fn finish(
        builder: ConfigBuilder<DefaultState>,
        env_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))?;
        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        if cfg.tmdb.api_key.is_none() {
            cfg.tmdb.api_key = env_api_key.filter(|k| !k.is_empty()).map(ApiKey::new);
        }
        if cfg.tmdb.api_key.is_none() {
            return Err(ConfigError::NotFound(format!(
                "tmdb.api_key (set {API_KEY_ENV})"
            )));
        }

        Ok(cfg)
    }
}
