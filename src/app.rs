use crate::report::Report;
use color_eyre::Result;
use eyre::WrapErr as _;
use playlist_stats_config::Config;
use std::io::Write;
use youtube_client::{
    HttpTransport,
    Transport,
    YouTubeClient,
};

/// Runs the whole pipeline: playlist ids, then statistics, then the report.
pub struct App<T> {
    config: Config,
    client: YouTubeClient<T>,
}

impl App<HttpTransport> {
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new().wrap_err("Failed to create HTTP client")?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> App<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        debug!(?config, "configuration loaded");
        let client = YouTubeClient::with_base_url(transport, config.api_base_url.clone(), config.api_key.clone())
            .max_pages(config.max_pages);
        Self { config, client }
    }

    /// Writes the report followed by the total line to `out`.
    ///
    /// Both fetches finish before anything is written, so a failure leaves `out` untouched.
    #[instrument(level = "debug", skip_all, fields(playlist = %self.config.playlist_id))]
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let video_ids = self
            .client
            .playlist_video_ids(&self.config.playlist_id)
            .wrap_err("cannot fetch videos from playlist")?;

        let videos = self
            .client
            .videos(&video_ids)
            .wrap_err("cannot fetch statistics for videos")?;

        let report = Report::new(videos);
        if !report.is_empty() {
            writeln!(out, "{report}")?;
        }
        writeln!(out, "Total views: {}", report.total_views())?;
        out.flush()?;
        Ok(())
    }
}
