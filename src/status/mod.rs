pub mod fetcher;
pub mod negotiate;
pub mod response;

pub use fetcher::{StatusFetcher, DEFAULT_FETCH_TIMEOUT};
pub use negotiate::{Representation, HTML_MEDIA_TYPE, JSON_MEDIA_TYPE};
pub use response::StatusPayload;
