//! Blocking client for the parts of the YouTube Data API v3 needed to report on a playlist:
//! listing a playlist's items page by page and looking up video statistics in one batch.

#[macro_use]
extern crate tracing;

mod client;
mod decode;
mod error;
pub mod playlist;
mod request;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod transport;
pub mod videos;

pub use client::YouTubeClient;
pub use decode::{
    permissive_u64,
    Statistics,
    Video,
};
pub use error::{
    BoxError,
    ClientError,
};
pub use request::{
    ApiRequest,
    QueryParams,
    RequestBuilder,
    API_BASE_URL,
};
pub use transport::{
    ApiResponse,
    HttpTransport,
    Transport,
};
