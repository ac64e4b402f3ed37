use crate::{
    request::RequestBuilder,
    transport::Transport,
};
use url::Url;

/// Read-only access to the YouTube Data API for one API key.
///
/// The paginated playlist traversal lives in [`crate::playlist`], the batched statistics
/// lookup in [`crate::videos`].
#[derive(Debug, Clone)]
pub struct YouTubeClient<T> {
    pub(crate) transport: T,
    pub(crate) requests: RequestBuilder,
    pub(crate) api_key: String,
    pub(crate) max_pages: Option<usize>,
}

impl<T: Transport> YouTubeClient<T> {
    /// Client against the public API host.
    pub fn new(transport: T, api_key: impl Into<String>) -> Self {
        Self::with_base_url(transport, default_base_url(), api_key)
    }

    pub fn with_base_url(transport: T, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            requests: RequestBuilder::new(base_url),
            api_key: api_key.into(),
            max_pages: None,
        }
    }

    /// Caps the number of pages a single traversal may request. `None` means no cap.
    pub fn max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }
}

fn default_base_url() -> Url {
    RequestBuilder::default().base_url().clone()
}
