use crate::{
    client::YouTubeClient,
    decode::{
        Video,
        VideoListResponse,
    },
    error::ClientError,
    request::QueryParams,
    transport::Transport,
};

pub const VIDEOS: &str = "videos";

impl<T: Transport> YouTubeClient<T> {
    /// Looks up snippet and statistics for all `video_ids` in one batched request.
    ///
    /// The ids are not chunked: a list longer than the API accepts per request surfaces as
    /// whatever error the API answers with.
    #[instrument(level = "debug", skip_all, fields(count = video_ids.len()))]
    pub fn videos(&self, video_ids: &[String]) -> Result<Vec<Video>, ClientError> {
        if video_ids.is_empty() {
            debug!("no video ids, skipping statistics lookup");
            return Ok(Vec::new());
        }

        let params = QueryParams::from([
            ("part", "statistics,id,snippet".to_string()),
            ("id", video_ids.join(",")),
            ("key", self.api_key.clone()),
        ]);
        let request = self.requests.build(VIDEOS, &params);
        let response: VideoListResponse = self.transport.send(&request)?.decode(VIDEOS)?;

        debug!(videos = response.items.len(), "decoded video statistics");
        Ok(response.items)
    }
}
