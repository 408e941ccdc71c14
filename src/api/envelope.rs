use serde::{Deserialize, Serialize};

use crate::domain::order::OrderPayload;

/// Incoming body: `{ "data": { ...order fields... } }`.
///
/// A body whose `data` is absent or `null` is an empty payload and fails the
/// first field check.
#[derive(Debug, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub data: Option<OrderPayload>,
}

impl RequestEnvelope {
    pub fn into_payload(self) -> OrderPayload {
        self.data.unwrap_or_default()
    }
}

/// Successful body: `{ "data": ... }`.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Failure body: `{ "error": "..." }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
