mod app_config;
mod args;

use app_config::{
    AppConfig,
    PROJECT_NAME,
};
pub use app_config::get_config_dir;
pub use args::Args;
use color_eyre::Result;
use config::builder::{
    ConfigBuilder,
    DefaultState,
};
use eyre::{
    eyre,
    Context as _,
};
use serde::Deserialize;
use std::{
    fmt,
    path::Path,
};
use url::Url;

const DEFAULT_CONFIG: &str = include_str!("default-config.yaml");

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    app_config: AppConfig,
    pub api_key: String,
    pub playlist_id: String,
    pub api_base_url: Url,
    #[serde(default)]
    pub max_pages: Option<usize>,
    #[serde(default)]
    pub verbose: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("config_dir", &self.app_config.config_dir)
            .field("api_key", &"REDACTED")
            .field("playlist_id", &self.playlist_id)
            .field("api_base_url", &self.api_base_url.as_str())
            .field("max_pages", &self.max_pages)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Config {
    /// Layers, lowest precedence first: built-in defaults, `config.yaml` in the config
    /// directory, `PLAYLIST_STATS_*` environment variables, command-line arguments.
    pub fn new(args: Args) -> Result<Self> {
        let environment = config::Environment::with_prefix(&PROJECT_NAME).try_parsing(true);
        Self::load(&get_config_dir(), environment, args)
    }

    /// Built-in defaults overridden by `args` only; neither files nor the environment are read.
    pub fn from_args(args: Args) -> Result<Self> {
        let config_dir = get_config_dir();
        let builder = Self::defaults(&config_dir)?.add_source(args);
        Self::finish(builder, &config_dir)
    }

    fn load(config_dir: &Path, environment: config::Environment, args: Args) -> Result<Self> {
        let builder = Self::defaults(config_dir)?
            .add_source(
                config::File::from(config_dir.join("config.yaml"))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(environment)
            .add_source(args);
        Self::finish(builder, config_dir)
    }

    fn defaults(config_dir: &Path) -> Result<ConfigBuilder<DefaultState>> {
        let config_dir = config_dir
            .to_str()
            .ok_or_else(|| eyre!("config directory {config_dir:?} is not valid UTF-8"))?;

        Ok(config::Config::builder()
            .set_default("config_dir", config_dir)?
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Yaml)))
    }

    fn finish(builder: ConfigBuilder<DefaultState>, config_dir: &Path) -> Result<Self> {
        let settings = builder.build().context("Failed to load configuration")?;

        let has_api_key = settings
            .get_string("api_key")
            .is_ok_and(|key| !key.trim().is_empty());
        if !has_api_key {
            return Err(eyre!(
                "no YouTube API key configured; pass --api-key, set YOUTUBE_API_KEY, or add `api_key` to {:?}",
                config_dir.join("config.yaml")
            ));
        }

        let config: Self = settings.try_deserialize().context("Invalid configuration")?;
        if config.api_base_url.cannot_be_a_base() {
            return Err(eyre!(
                "api_base_url {:?} cannot take a resource path; expected something like https://host/youtube/v3/",
                config.api_base_url.as_str()
            ));
        }
        Ok(config)
    }

    pub fn config_dir(&self) -> &Path {
        &self.app_config.config_dir
    }
}
