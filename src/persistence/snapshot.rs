//! Snapshot encoding - the full transaction sequence as a JSON array.

use crate::{
    core::Transaction,
    errors::{Error, Result},
};

/// Serializes the whole sequence, attribute for attribute.
pub fn encode(transactions: &[Transaction]) -> Result<String> {
    serde_json::to_string(transactions).map_err(|e| Error::PersistFailure {
        message: format!("Failed to encode snapshot: {e}"),
    })
}

/// Decodes a snapshot produced by [`encode`].
pub fn decode(text: &str) -> Result<Vec<Transaction>> {
    serde_json::from_str(text).map_err(|e| Error::DecodeFailure {
        message: e.to_string(),
    })
}
