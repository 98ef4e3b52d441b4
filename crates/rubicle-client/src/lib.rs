//! Blocking HTTP client for the external cube solver service.
//!
//! The solver itself — state-space search, pruning tables, Kociemba's
//! algorithm — lives behind the service's `/solve/` endpoint; this crate
//! only owns the data contract: it validates a face grid, serializes it as
//! nested color-index arrays, and maps the three failure classes (local
//! validation, transport, solver-reported) onto [`ClientError`].

mod client;
mod dto;
mod error;

pub use self::{
    client::{DEFAULT_BASE_URL, SolverClient},
    dto::{Solution, SolveRecord},
    error::ClientError,
};
