use thiserror::Error;

/// Why a location ping did not reach the server.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PingError {
    /// Connection failure, request error or non-success status.
    #[error("Network send failure: {0}")]
    NetworkSendFailure(String),
}
