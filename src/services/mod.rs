//! Services layer (ports + adapters).
//!
//! - `oracle`: the dictionary lookup contract the game depends on.
//! - `datamuse`: HTTP adapter implementing it.
//! - `checker`: async word check streaming verdicts back to the UI loop.

pub mod checker;
pub mod datamuse;
pub mod oracle;
pub mod runtime;

pub use checker::{CheckMessage, CheckTask, WordCheckService};
pub use datamuse::{DatamuseOracle, DATAMUSE_ENDPOINT};
pub use oracle::{OracleEntry, OracleError, OracleFuture, WordOracle};
