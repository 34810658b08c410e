//! Curator engine: catalog page fetching and decoding.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_artworks_page, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{ArtworkFetcher, FetchSettings, ReqwestFetcher, CATALOG_ENDPOINT};
pub use types::{ArtworkId, ArtworkRecord, EngineEvent, FailureKind, FetchError, RequestToken};
