//! Datamuse adapter for the oracle port.
//!
//! `GET <endpoint>?sp=<word>&max=1` returns a JSON array of candidate
//! matches; the endpoint is overridable so tests can point it at a stub.

use std::time::Duration;

use super::oracle::{OracleEntry, OracleError, OracleFuture, WordOracle};

pub const DATAMUSE_ENDPOINT: &str = "https://api.datamuse.com/words";

// The lookup protocol has no timeout of its own; without this a hung oracle
// would stall every remaining column.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct DatamuseOracle {
    client: reqwest::Client,
    endpoint: String,
}

impl DatamuseOracle {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_endpoint(DATAMUSE_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl WordOracle for DatamuseOracle {
    fn lookup(&self, word: &str) -> OracleFuture {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[("sp", word), ("max", "1")]);

        Box::pin(async move {
            let response = request
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|err| OracleError::Request(err.to_string()))?;
            response
                .json::<Vec<OracleEntry>>()
                .await
                .map_err(|err| OracleError::Malformed(err.to_string()))
        })
    }
}
