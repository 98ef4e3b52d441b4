//! Wire DTOs for the solve and history endpoints.

use serde::{Deserialize, Serialize};

use rubicle_core::FaceGrid;

/// Request body of `POST /solve/`.
#[derive(Debug, Serialize)]
pub(crate) struct SolveRequest<'a> {
    pub(crate) cube: &'a FaceGrid,
}

/// Response body of `POST /solve/` (success or application-level error).
#[derive(Debug, Deserialize)]
pub(crate) struct SolveResponse {
    #[serde(default)]
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) solution: Vec<String>,
    #[serde(default)]
    pub(crate) move_count: u32,
    #[serde(default)]
    pub(crate) solve_time_ms: f64,
    #[serde(default)]
    pub(crate) facelet_string: String,
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) message: Option<String>,
}

/// Structured error body some non-2xx responses carry.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,
    #[serde(default)]
    pub(crate) details: Option<String>,
}

/// A successful solve result.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Ordered move tokens in algebraic notation (e.g. `R`, `U'`, `F2`).
    pub moves: Vec<String>,
    /// Number of moves in the solution.
    pub move_count: u32,
    /// Server-side solve time in milliseconds.
    pub solve_time_ms: f64,
    /// The facelet string the server computed from the submitted grid,
    /// for cross-checking against the client's own encoding.
    pub facelet_string: String,
}

/// One entry of the solve history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRecord {
    /// Server-assigned record id.
    pub id: i64,
    /// Facelet string of the submitted cube state.
    pub facelet_string: String,
    /// The returned move sequence.
    pub solution: Vec<String>,
    /// Number of moves in the solution.
    pub move_count: u32,
    /// Server-side solve time in milliseconds.
    pub solve_time_ms: f64,
    /// Submission timestamp (ISO-ish date string, passed through as-is).
    pub timestamp: String,
    /// Address the solve was requested from.
    pub ip_address: String,
}
