use serde::de::DeserializeOwned;

use crate::client::error::{ClientError, ClientResult};

/// Raw payload of a successful API call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiResponse {
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Payload as UTF-8 text.
    pub fn text(&self) -> ClientResult<&str> {
        std::str::from_utf8(&self.body).map_err(|e| ClientError::Decode {
            message: e.to_string(),
        })
    }

    /// Decode the payload as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl From<Vec<u8>> for ApiResponse {
    fn from(body: Vec<u8>) -> Self {
        Self { body }
    }
}

impl AsRef<[u8]> for ApiResponse {
    fn as_ref(&self) -> &[u8] {
        &self.body
    }
}
