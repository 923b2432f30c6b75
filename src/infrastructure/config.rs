use std::path::{Path, PathBuf};

use config::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

use crate::{
    presentation::config::{keybindings::KeyBindings, styles::Styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Environment variables that override the persistence and webhook settings
pub const SERVICE_URL_ENV: &str = "SERVICE_URL";
pub const SERVICE_ANON_KEY_ENV: &str = "SERVICE_ANON_KEY";
pub const WEBHOOK_URL_ENV: &str = "WEBHOOK_URL";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Connection to the PostgREST-style persistence service
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "secret_string")]
    pub anon_key: Option<SecretString>,
}

impl ServiceConfig {
    /// Both the URL and the key are present; otherwise the app runs in degraded mode
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.trim().is_empty())
            && self
                .anon_key
                .as_ref()
                .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }
}

/// Automation webhook notified after each successful save
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WebhookConfig {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub url: Option<String>,
    /// Value of the `Origin` header; derived from `url` when unset
    #[serde(default, deserialize_with = "non_empty_string")]
    pub origin: Option<String>,
}

impl WebhookConfig {
    pub fn origin(&self) -> Option<String> {
        if let Some(origin) = &self.origin {
            return Some(origin.clone());
        }
        let url = reqwest::Url::parse(self.url.as_deref()?).ok()?;
        Some(url.origin().ascii_serialization())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn secret_string<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty_string(deserializer)?.map(SecretString::from))
}

impl Config {
    /// The defaults compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Loads the embedded defaults, the optional user config file and the environment
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_data_dir(), &utils::get_config_dir(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Same as [`Config::new`] with explicit directories and environment lookup
    pub fn load(
        data_dir: &Path,
        config_dir: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;

        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            found_config |= path.exists();
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        cfg.keybindings.merge_defaults(&default_config.keybindings);
        cfg.styles.merge_defaults(&default_config.styles);
        if cfg.webhook.url.is_none() {
            cfg.webhook.url = default_config.webhook.url.clone();
            if cfg.webhook.origin.is_none() {
                cfg.webhook.origin = default_config.webhook.origin.clone();
            }
        }

        cfg.apply_env(env);
        Ok(cfg)
    }

    /// Environment values win over file values. Empty values are ignored.
    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| {
            env(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(url) = lookup(SERVICE_URL_ENV) {
            self.service.url = Some(url);
        }
        if let Some(key) = lookup(SERVICE_ANON_KEY_ENV) {
            self.service.anon_key = Some(SecretString::from(key));
        }
        if let Some(url) = lookup(WEBHOOK_URL_ENV) {
            self.webhook.url = Some(url);
            self.webhook.origin = None;
        }
    }
}
