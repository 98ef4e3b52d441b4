//! Client error taxonomy.

use rubicle_core::GridError;

/// Failure of a solver-service interaction.
///
/// Three classes, all terminal for the triggering action (nothing is
/// retried automatically, and a failed solve never mutates cube state):
///
/// - local validation ([`InvalidCubeState`]) — raised before any network
///   traffic;
/// - transport ([`Transport`], [`SolverRejected`], [`HistoryFetch`],
///   [`InvalidBody`]) — the request failed or the response was not usable;
/// - application-level ([`SolverFailed`]) — the service answered
///   successfully but reported a solver failure, surfaced verbatim.
///
/// [`InvalidCubeState`]: ClientError::InvalidCubeState
/// [`Transport`]: ClientError::Transport
/// [`SolverRejected`]: ClientError::SolverRejected
/// [`HistoryFetch`]: ClientError::HistoryFetch
/// [`InvalidBody`]: ClientError::InvalidBody
/// [`SolverFailed`]: ClientError::SolverFailed
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ClientError {
    /// The grid failed validation; no request was made.
    #[display("invalid cube state: {_0}")]
    InvalidCubeState(GridError),
    /// The HTTP request itself failed (connection, protocol).
    #[display("request failed: {_0}")]
    Transport(reqwest::Error),
    /// The solve endpoint answered with a non-success status.
    #[display("{message}")]
    #[from(skip)]
    SolverRejected {
        /// HTTP status code of the response.
        status: u16,
        /// Best-effort extracted error message.
        message: String,
    },
    /// The solve endpoint answered 2xx but reported a solver failure.
    #[display("{message}")]
    #[from(skip)]
    SolverFailed {
        /// The server-supplied error or message string.
        message: String,
    },
    /// The history endpoint answered with a non-success status.
    #[display("failed to fetch history: HTTP {status}")]
    #[from(skip)]
    HistoryFetch {
        /// HTTP status code of the response.
        status: u16,
    },
    /// A response body could not be parsed as the expected JSON.
    #[display("invalid response body: {_0}")]
    InvalidBody(serde_json::Error),
}

impl ClientError {
    /// Returns whether this failure was raised before any network call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::InvalidCubeState(_))
    }
}
