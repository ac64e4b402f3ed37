use crate::{
    error::ClientError,
    request::ApiRequest,
};
use serde::de::DeserializeOwned;

/// Sends one request and hands back the raw response.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        (**self).send(request)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Strictly decodes the body as `T`. Only the error carries the API's own message, if any.
    pub fn decode<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|source| ClientError::decode(resource, &self.body, source))
    }
}

/// Blocking HTTPS transport backed by a single reused reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ClientError::transport("client", err))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    #[instrument(level = "debug", skip_all, fields(resource = request.resource()))]
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        debug!(%request, "sending request");

        let response = self
            .client
            .request(request.method().clone(), request.url().clone())
            .send()
            .map_err(|err| ClientError::transport(request.resource(), err))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| ClientError::transport(request.resource(), err))?;
        let response = ApiResponse { status, body };

        if !response.is_success() {
            warn!(status, "API responded with a non-success status");
        }
        Ok(response)
    }
}
