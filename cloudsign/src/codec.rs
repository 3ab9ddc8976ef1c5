use bytes::Bytes;
use cloudsign_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Codec turns operation inputs into request bodies and response bodies
/// into outputs.
///
/// The codec is handed to [`Client::new`](crate::Client::new); nothing is
/// discovered at runtime.
pub trait Codec: Debug + Send + Sync + 'static {
    /// Serialize `value` into a request body.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes>;

    /// Deserialize a response body.
    fn decode<T: DeserializeOwned>(&self, bs: &[u8]) -> Result<T>;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Bytes> {
        serde_json::to_vec(value)
            .map(Bytes::from)
            .map_err(|e| Error::request_invalid("failed to encode request body").with_source(e))
    }

    fn decode<T: DeserializeOwned>(&self, bs: &[u8]) -> Result<T> {
        serde_json::from_slice(bs)
            .map_err(|e| Error::unexpected("failed to decode response body").with_source(e))
    }
}
