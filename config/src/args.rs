use clap::Parser;
use url::Url;

/// Lists the videos of a YouTube playlist by view count.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "playlist-stats", author, version = version(), long_about = None)]
pub struct Args {
    /// YouTube Data API key.
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Playlist to report on, overriding the configured one.
    #[arg(long = "playlist", value_name = "PLAYLIST_ID")]
    pub playlist_id: Option<String>,

    /// Base URL of the Data API, e.g. to point at a mock server.
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<Url>,

    /// Give up on a playlist that still has more pages after this many requests.
    #[arg(long, value_name = "N")]
    pub max_pages: Option<usize>,

    /// Log requests and pagination progress to stderr.
    #[arg(short, long, action)]
    pub verbose: bool,
}

mod config_ext {
    use super::*;
    use config::{
        Map,
        Source,
        Value,
    };
    use std::collections::HashMap;

    impl Source for Args {
        fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
            Box::new((*self).clone())
        }

        fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
            let mut cache = HashMap::<String, Value>::new();
            if let Some(api_key) = &self.api_key {
                cache.insert("api_key".to_string(), api_key.clone().into());
            }
            if let Some(playlist_id) = &self.playlist_id {
                cache.insert("playlist_id".to_string(), playlist_id.clone().into());
            }
            if let Some(api_base_url) = &self.api_base_url {
                cache.insert("api_base_url".to_string(), api_base_url.to_string().into());
            }
            if let Some(max_pages) = self.max_pages {
                cache.insert("max_pages".to_string(), (max_pages as u64).into());
            }
            if self.verbose {
                cache.insert("verbose".to_string(), true.into());
            }
            Ok(cache)
        }
    }
}

pub fn version() -> String {
    let author = clap::crate_authors!();
    let config_dir_path = crate::get_config_dir().display().to_string();

    format!(
        "{}

Authors: {author}

Config directory: {config_dir_path}",
        clap::crate_version!()
    )
}
