//! Dictionary oracle port. The checker only ever talks to this trait, so
//! tests can swap in a fake without touching the network.

use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

pub type OracleFuture =
    Pin<Box<dyn Future<Output = Result<Vec<OracleEntry>, OracleError>> + Send + 'static>>;

/// One candidate match returned by the oracle. Extra response fields are
/// ignored; only the headword matters for validity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OracleEntry {
    pub word: String,
    #[serde(default)]
    pub score: Option<u64>,
}

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle request failed: {0}")]
    Request(String),
    #[error("malformed oracle response: {0}")]
    Malformed(String),
}

pub trait WordOracle: Send + Sync {
    /// Look up a candidate word, returning zero or more matches.
    fn lookup(&self, word: &str) -> OracleFuture;
}

/// A candidate is valid when the first returned entry spells the same word,
/// case-insensitively.
pub fn entries_confirm(word: &str, entries: &[OracleEntry]) -> bool {
    entries
        .first()
        .is_some_and(|entry| entry.word.eq_ignore_ascii_case(word))
}

#[cfg(test)]
#[path = "../../tests/unit/services/oracle.rs"]
mod tests;
