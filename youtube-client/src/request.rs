use reqwest::Method;
use std::{
    collections::BTreeMap,
    fmt,
};
use url::Url;

/// Versioned base of the YouTube Data API.
pub const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Query parameters by name. Sorted, so built URLs are stable.
pub type QueryParams = BTreeMap<&'static str, String>;

const REDACTED_PARAMS: &[&str] = &["key"];

/// Builds GET requests against one API base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(Url::parse(API_BASE_URL).expect("API_BASE_URL is a valid URL"))
    }
}

impl RequestBuilder {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `resource` to the base path and URL-encodes `params` as the query.
    ///
    /// A base URL that cannot be a base (`mailto:`, `data:`) gets no resource segment; callers
    /// reject those up front.
    pub fn build(&self, resource: &str, params: &QueryParams) -> ApiRequest {
        let mut url = self.base_url.clone();
        url.set_query(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(resource);
        }
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(name, value)| (*name, value.as_str())));
        }

        ApiRequest {
            method: Method::GET,
            resource: resource.to_string(),
            url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    resource: String,
    url: Url,
}

impl ApiRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The resource name the request was built for, e.g. `playlistItems`.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Decoded value of the query parameter `name`, if present.
    pub fn query(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Shows the request with secrets masked, for logging.
impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut url = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(key, value)| {
                let value = if REDACTED_PARAMS.contains(&key.as_ref()) {
                    "REDACTED".to_string()
                } else {
                    value.into_owned()
                };
                (key.into_owned(), value)
            })
            .collect();
        if !pairs.is_empty() {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        write!(f, "{} {}", self.method, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&'static str, &str)]) -> QueryParams {
        pairs.iter().map(|(name, value)| (*name, value.to_string())).collect()
    }

    #[test]
    fn builds_https_get_under_versioned_path() {
        let request = RequestBuilder::default().build("playlistItems", &params(&[("playlistId", "PL123")]));

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().scheme(), "https");
        assert_eq!(request.url().host_str(), Some("www.googleapis.com"));
        assert_eq!(request.url().path(), "/youtube/v3/playlistItems");
        assert_eq!(request.resource(), "playlistItems");
    }

    #[test]
    fn query_is_encoded_in_stable_order() {
        let request = RequestBuilder::default().build(
            "videos",
            &params(&[("part", "statistics,id,snippet"), ("key", "k y"), ("id", "a,b")]),
        );

        assert_eq!(
            request.url().query(),
            Some("id=a%2Cb&key=k+y&part=statistics%2Cid%2Csnippet")
        );
        assert_eq!(request.query("id").as_deref(), Some("a,b"));
        assert_eq!(request.query("key").as_deref(), Some("k y"));
        assert_eq!(request.query("pageToken"), None);
    }

    #[test]
    fn custom_base_without_trailing_slash() {
        let base = Url::parse("http://localhost:8080/youtube/v3").unwrap();
        let request = RequestBuilder::new(base).build("videos", &QueryParams::new());

        assert_eq!(request.url().as_str(), "http://localhost:8080/youtube/v3/videos");
    }

    #[test]
    fn display_redacts_api_key() {
        let request = RequestBuilder::default().build("videos", &params(&[("id", "abc"), ("key", "secret")]));

        let shown = request.to_string();
        assert!(!shown.contains("secret"), "{shown}");
        assert_eq!(
            shown,
            "GET https://www.googleapis.com/youtube/v3/videos?id=abc&key=REDACTED"
        );
    }
}
