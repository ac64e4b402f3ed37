//! Response payloads of the `playlistItems` and `videos` endpoints.
//!
//! Decoding is strict everywhere except for two fields:
//!
//! - The engagement counters. The API documents them as strings, but native numbers are
//!   seen as well, so [`permissive_u64`] accepts either.
//! - `nextPageToken`, which ends pagination when it is missing or not a string.

use serde::{
    de,
    Deserialize,
    Deserializer,
};

/// The two encodings a counter may arrive in. Variant order is the order they are tried.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EncodedInt {
    Native(u64),
    Text(String),
}

/// Decodes an integer given either as a JSON number or as a base-10 string literal.
///
/// A literal is ASCII digits only: no sign, no whitespace, no separators.
pub fn permissive_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match EncodedInt::deserialize(deserializer)? {
        EncodedInt::Native(value) => Ok(value),
        EncodedInt::Text(text) if !text.bytes().all(|b| b.is_ascii_digit()) => Err(de::Error::custom(format!(
            "invalid integer literal {text:?}: expected only ASCII digits"
        ))),
        EncodedInt::Text(text) => text
            .parse()
            .map_err(|err| de::Error::custom(format!("invalid integer literal {text:?}: {err}"))),
    }
}

/// Treats anything but a string as "no token".
fn lenient_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(token)) => Some(token),
        _ => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Statistics {
    #[serde(rename = "viewCount", deserialize_with = "permissive_u64")]
    pub views: u64,
    #[serde(rename = "likeCount", deserialize_with = "permissive_u64")]
    pub likes: u64,
    #[serde(rename = "commentCount", deserialize_with = "permissive_u64")]
    pub comments: u64,
}

/// A playlist entry together with its fetched statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "VideoItem")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub statistics: Statistics,
}

impl Video {
    pub fn views(&self) -> u64 {
        self.statistics.views
    }
}

/// Wire shape of one `videos` item; the title sits under `snippet`.
#[derive(Deserialize)]
struct VideoItem {
    id: String,
    snippet: Snippet,
    statistics: Statistics,
}

#[derive(Deserialize)]
struct Snippet {
    title: String,
}

impl From<VideoItem> for Video {
    fn from(item: VideoItem) -> Self {
        Self {
            id: item.id,
            title: item.snippet.title,
            statistics: item.statistics,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    pub(crate) items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItemsPage {
    pub(crate) items: Vec<PlaylistItem>,
    #[serde(rename = "nextPageToken", default, deserialize_with = "lenient_token")]
    pub(crate) next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItem {
    #[serde(rename = "contentDetails")]
    pub(crate) content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentDetails {
    #[serde(rename = "videoId")]
    pub(crate) video_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn statistics(view_count: serde_json::Value) -> serde_json::Result<Statistics> {
        serde_json::from_value(json!({
            "viewCount": view_count,
            "likeCount": "3",
            "commentCount": 1,
        }))
    }

    #[test]
    fn counters_accept_numbers_and_numeric_strings() {
        assert_eq!(statistics(json!(42)).unwrap().views, 42);
        assert_eq!(statistics(json!("42")).unwrap().views, 42);

        let stats = statistics(json!("18446744073709551615")).unwrap();
        assert_eq!(
            stats,
            Statistics {
                views: u64::MAX,
                likes: 3,
                comments: 1,
            }
        );
    }

    #[test]
    fn counters_reject_everything_else() {
        let too_big = json!("18446744073709551616");
        assert!(statistics(too_big).is_err());

        let cases = [
            json!("abc"),
            json!(""),
            json!(" 42"),
            json!("+42"),
            json!("-1"),
            json!("1_000"),
            json!(-1),
            json!(1.5),
            json!(null),
            json!({}),
        ];
        for bad in cases {
            assert!(statistics(bad.clone()).is_err(), "{bad} should not decode");
        }
    }

    #[test]
    fn one_bad_counter_fails_the_whole_record() {
        let result: serde_json::Result<Statistics> = serde_json::from_value(json!({
            "viewCount": "10",
            "likeCount": "many",
            "commentCount": "0",
        }));
        assert!(result.is_err());

        let missing: serde_json::Result<Statistics> = serde_json::from_value(json!({
            "viewCount": "10",
            "likeCount": "1",
        }));
        assert!(missing.is_err());
    }

    #[test]
    fn video_takes_title_from_snippet() {
        let video: Video = serde_json::from_value(json!({
            "kind": "youtube#video",
            "id": "dQw4w9WgXcQ",
            "snippet": { "title": "Never Gonna Give You Up", "channelTitle": "Rick Astley" },
            "statistics": { "viewCount": "1500000000", "likeCount": "17000000", "commentCount": "2300000", "favoriteCount": "0" },
        }))
        .unwrap();

        assert_eq!(
            video,
            Video {
                id: "dQw4w9WgXcQ".to_string(),
                title: "Never Gonna Give You Up".to_string(),
                statistics: Statistics {
                    views: 1_500_000_000,
                    likes: 17_000_000,
                    comments: 2_300_000,
                },
            }
        );
        assert_eq!(video.views(), 1_500_000_000);
    }

    #[test]
    fn video_requires_id_title_and_statistics() {
        let stats = json!({ "viewCount": 1, "likeCount": 1, "commentCount": 1 });
        let cases = [
            json!({ "snippet": { "title": "t" }, "statistics": stats }),
            json!({ "id": "a", "snippet": {}, "statistics": stats }),
            json!({ "id": "a", "snippet": { "title": 7 }, "statistics": stats }),
            json!({ "id": "a", "snippet": { "title": "t" } }),
        ];
        for case in cases {
            assert!(serde_json::from_value::<Video>(case.clone()).is_err(), "{case}");
        }
    }

    #[test]
    fn page_token_is_optional_and_lenient() {
        let page: PlaylistItemsPage = serde_json::from_value(json!({
            "items": [{ "contentDetails": { "videoId": "a" } }],
            "nextPageToken": "CAUQAA",
        }))
        .unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));

        for token in [json!(null), json!(5), json!(["x"])] {
            let page: PlaylistItemsPage = serde_json::from_value(json!({ "items": [], "nextPageToken": token })).unwrap();
            assert_eq!(page.next_page_token, None);
        }

        let page: PlaylistItemsPage = serde_json::from_value(json!({ "items": [] })).unwrap();
        assert_eq!(page.next_page_token, None);
    }

    #[test]
    fn page_items_are_strict() {
        assert!(serde_json::from_value::<PlaylistItemsPage>(json!({ "nextPageToken": "x" })).is_err());
        assert!(serde_json::from_value::<PlaylistItemsPage>(json!({
            "items": [{ "contentDetails": {} }],
        }))
        .is_err());
    }
}
