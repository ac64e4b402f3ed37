use serde::Deserialize;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request to `{resource}` could not be completed")]
    Transport {
        resource: String,
        #[source]
        source: BoxError,
    },
    #[error("response from `{resource}` could not be decoded{}", api_message_suffix(.api_message))]
    Decode {
        resource: String,
        api_message: Option<String>,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{resource}` still had more pages after {limit} requests")]
    PageLimitExceeded { resource: String, limit: usize },
}

impl ClientError {
    pub(crate) fn transport(resource: &str, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            resource: resource.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn decode(resource: &str, body: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            resource: resource.to_string(),
            api_message: api_error_message(body),
            source,
        }
    }
}

fn api_message_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(" (API said: {message})"),
        None => String::new(),
    }
}

/// Shape of the error body Google APIs return alongside non-2xx statuses.
#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u64>("\"nope\"").unwrap_err()
    }

    #[test]
    fn decode_error_surfaces_api_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key."}}"#;
        let err = ClientError::decode("videos", body, json_error());
        assert_eq!(
            err.to_string(),
            "response from `videos` could not be decoded (API said: API key not valid. Please pass a valid API key.)"
        );
    }

    #[test]
    fn decode_error_without_envelope() {
        let err = ClientError::decode("playlistItems", "<html>", json_error());
        assert_eq!(err.to_string(), "response from `playlistItems` could not be decoded");
    }
}
