use std::io;

use thiserror::Error;

/// Failure modes of an extinfo query.
///
/// Everything here is terminal for the query that produced it: the decode
/// layer never retries, and no partially assembled record is ever returned
/// alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The response ended before a full value could be read.
    #[error("response truncated before a full value could be read")]
    TruncatedResponse,

    /// An all-players response must consist of whole player records.
    #[error("bulk player response of {len} bytes is not a multiple of the record size")]
    MalformedBulkResponse { len: usize },

    /// The server is not running a team mode. This is an outcome to branch
    /// on rather than a failure: it is how a teams-scores query reports
    /// "not applicable", which is distinct from a team game with no teams.
    #[error("server is not running a team mode")]
    NotTeamMode,

    /// No client with the requested cn is connected.
    #[error("no client with cn {0}")]
    InvalidClientId(i32),

    /// The server speaks a different revision of the extinfo protocol.
    #[error("extinfo protocol version mismatch: expected {expected}, got {actual}")]
    ProtocolVersionMismatch { expected: i32, actual: i32 },

    /// The server did not answer within the configured timeout.
    #[error("server did not respond in time")]
    Timeout,

    /// Hostname did not resolve to a usable address.
    #[error("could not resolve {0}")]
    UnresolvableHost(String),

    #[error("network error")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
