use crate::{
    client::YouTubeClient,
    decode::PlaylistItemsPage,
    error::ClientError,
    request::QueryParams,
    transport::Transport,
};

pub const PLAYLIST_ITEMS: &str = "playlistItems";

impl<T: Transport> YouTubeClient<T> {
    /// Collects the ids of every video in `playlist_id`, following `nextPageToken` until a page
    /// comes back without one.
    ///
    /// Ids are returned in the order the pages listed them. Any transport or decode failure
    /// aborts the traversal; a partial list is never returned.
    #[instrument(level = "debug", skip(self))]
    pub fn playlist_video_ids(&self, playlist_id: &str) -> Result<Vec<String>, ClientError> {
        let mut params = QueryParams::from([
            ("part", "id,contentDetails".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("key", self.api_key.clone()),
        ]);
        let mut video_ids = Vec::new();
        let mut pages = 0;

        loop {
            let request = self.requests.build(PLAYLIST_ITEMS, &params);
            let page: PlaylistItemsPage = self.transport.send(&request)?.decode(PLAYLIST_ITEMS)?;
            pages += 1;

            debug!(
                page = pages,
                items = page.items.len(),
                has_next = page.next_page_token.is_some(),
                "decoded playlist page"
            );
            video_ids.extend(page.items.into_iter().map(|item| item.content_details.video_id));

            let Some(token) = page.next_page_token else {
                break;
            };
            if self.max_pages.is_some_and(|limit| pages >= limit) {
                return Err(ClientError::PageLimitExceeded {
                    resource: PLAYLIST_ITEMS.to_string(),
                    limit: pages,
                });
            }
            params.insert("pageToken", token);
        }

        info!(pages, videos = video_ids.len(), "fetched playlist");
        Ok(video_ids)
    }
}
