//! The blocking solver-service client.

use log::{debug, warn};
use reqwest::{StatusCode, blocking::Client};
use serde_json::Value;

use rubicle_core::FaceGrid;

use crate::{
    dto::{ErrorBody, SolveRequest, SolveResponse, Solution, SolveRecord},
    error::ClientError,
};

/// Default base URL of the solver service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Blocking client for the external solve and history endpoints.
///
/// One request per call, no retry policy, no explicit timeout (the
/// ambient transport default applies): a failed attempt is surfaced
/// directly to the caller.
///
/// # Examples
///
/// ```no_run
/// use rubicle_client::SolverClient;
/// use rubicle_core::FaceGrid;
///
/// let client = SolverClient::new("http://localhost:8000");
/// let solution = client.solve(&FaceGrid::solved())?;
/// println!("{} moves", solution.move_count);
/// # Ok::<(), rubicle_client::ClientError>(())
/// ```
#[derive(Debug)]
pub struct SolverClient {
    client: Client,
    base_url: String,
}

impl SolverClient {
    /// Creates a client for the service at `base_url` (trailing slashes
    /// are trimmed).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a face grid to the solve endpoint and returns the move
    /// sequence.
    ///
    /// The grid is validated first; an invalid grid fails immediately
    /// with [`ClientError::InvalidCubeState`] and no network call is
    /// made.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidCubeState`] if validation fails;
    /// - [`ClientError::Transport`] if the request cannot be sent;
    /// - [`ClientError::SolverRejected`] on a non-2xx response, with a
    ///   best-effort message (structured JSON error body, else the raw
    ///   body text, else the HTTP status);
    /// - [`ClientError::SolverFailed`] if the service answered 2xx but
    ///   reported a non-success status, carrying its error string;
    /// - [`ClientError::InvalidBody`] if a 2xx body is not valid JSON.
    pub fn solve(&self, grid: &FaceGrid) -> Result<Solution, ClientError> {
        grid.validate()?;

        let url = format!("{}/solve/", self.base_url);
        debug!("posting cube state to {url}");
        let response = self
            .client
            .post(&url)
            .json(&SolveRequest { cube: grid })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(ClientError::SolverRejected {
                status: status.as_u16(),
                message: extract_error_message(status, &text),
            });
        }

        let body: SolveResponse = serde_json::from_str(&response.text()?)?;
        if body.status != "success" {
            let message = body
                .error
                .or(body.message)
                .unwrap_or_else(|| "Solver returned error".to_string());
            return Err(ClientError::SolverFailed { message });
        }

        debug!(
            "solution found: {} moves in {} ms",
            body.move_count, body.solve_time_ms
        );
        if let Ok(local) = grid.facelet_string()
            && !body.facelet_string.is_empty()
            && body.facelet_string != local
        {
            warn!(
                "server facelet string {} differs from local {local}",
                body.facelet_string
            );
        }

        Ok(Solution {
            moves: body.solution,
            move_count: body.move_count,
            solve_time_ms: body.solve_time_ms,
            facelet_string: body.facelet_string,
        })
    }

    /// Fetches the solve history list.
    ///
    /// A 2xx response without the expected `{status: "success", solves:
    /// [...]}` shape degrades to an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the request cannot be sent;
    /// - [`ClientError::HistoryFetch`] on a non-2xx response;
    /// - [`ClientError::InvalidBody`] if the body is not valid JSON.
    pub fn history(&self) -> Result<Vec<SolveRecord>, ClientError> {
        let url = format!("{}/history", self.base_url);
        debug!("fetching solve history from {url}");
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HistoryFetch {
                status: status.as_u16(),
            });
        }

        let value: Value = serde_json::from_str(&response.text()?)?;
        if value.get("status").and_then(Value::as_str) == Some("success")
            && let Some(solves) = value.get("solves").filter(|s| s.is_array())
        {
            return Ok(serde_json::from_value(solves.clone())?);
        }

        debug!("history response missing expected shape, treating as empty");
        Ok(Vec::new())
    }
}

/// Extracts the most useful error message from a non-2xx response body.
///
/// Preference order: a structured JSON body's `error` (with `details`
/// appended), then the raw body text, then a generic HTTP-status message.
/// A JSON body without an `error` field keeps the HTTP-status fallback
/// rather than echoing the JSON.
fn extract_error_message(status: StatusCode, text: &str) -> String {
    let fallback = format!("HTTP {status}");
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) => {
            let message = body.error.unwrap_or(fallback);
            match body.details {
                Some(details) => format!("{message} - {details}"),
                None => message,
            }
        }
        Err(_) if text.trim().is_empty() => fallback,
        Err(_) => text.to_string(),
    }
}
