//! View model for the solve-history page.

use rubicle_client::{SolveRecord, SolverClient};

/// State of the history list view.
///
/// A fetch failure is terminal for the view (the user goes back and
/// retries manually); a well-formed-but-unexpected response shows up
/// here as an empty `Loaded` list, not as `Failed`.
#[derive(Debug)]
pub enum HistoryView {
    /// The fetch has not completed yet.
    Loading,
    /// The fetch failed; the view shows the error with a back action.
    Failed {
        /// Human-readable failure description.
        error: String,
    },
    /// The fetch completed, possibly with an empty list.
    Loaded {
        /// Records, newest first as returned by the service.
        solves: Vec<SolveRecord>,
    },
}

impl HistoryView {
    /// Fetches the history and settles into `Loaded` or `Failed`.
    #[must_use]
    pub fn fetch(client: &SolverClient) -> Self {
        match client.history() {
            Ok(solves) => Self::Loaded { solves },
            Err(error) => Self::Failed {
                error: error.to_string(),
            },
        }
    }

    /// Returns the loaded records, if any.
    #[must_use]
    pub fn solves(&self) -> Option<&[SolveRecord]> {
        match self {
            Self::Loaded { solves } => Some(solves),
            Self::Loading | Self::Failed { .. } => None,
        }
    }
}

/// Formats a solve duration for display: sub-second times in whole
/// milliseconds, everything else in whole seconds.
#[must_use]
pub fn format_solve_time(time_ms: f64) -> String {
    if time_ms < 1000.0 {
        format!("{}ms", time_ms.round())
    } else {
        format!("{}s", (time_ms / 1000.0).round())
    }
}

/// Builds the one-line display summary of a record.
#[must_use]
pub fn record_summary(record: &SolveRecord) -> String {
    format!(
        "{} | {} moves | {} | id {}",
        record.timestamp,
        record.move_count,
        format_solve_time(record.solve_time_ms),
        record.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(move_count: u32, solve_time_ms: f64) -> SolveRecord {
        SolveRecord {
            id: 3,
            facelet_string: "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB".to_string(),
            solution: vec!["R".to_string()],
            move_count,
            solve_time_ms,
            timestamp: "2025-06-01T12:00:00Z".to_string(),
            ip_address: "127.0.0.1".to_string(),
        }
    }

    #[test]
    fn test_format_solve_time_sub_second() {
        assert_eq!(format_solve_time(0.4), "0ms");
        assert_eq!(format_solve_time(341.5), "342ms");
        assert_eq!(format_solve_time(999.0), "999ms");
    }

    #[test]
    fn test_format_solve_time_seconds() {
        assert_eq!(format_solve_time(1000.0), "1s");
        assert_eq!(format_solve_time(2499.0), "2s");
        assert_eq!(format_solve_time(2500.0), "3s");
    }

    #[test]
    fn test_record_summary() {
        assert_eq!(
            record_summary(&record(12, 341.5)),
            "2025-06-01T12:00:00Z | 12 moves | 342ms | id 3"
        );
    }

    #[test]
    fn test_solves_accessor() {
        let view = HistoryView::Loaded {
            solves: vec![record(1, 1.0)],
        };
        assert_eq!(view.solves().map(<[SolveRecord]>::len), Some(1));
        assert!(HistoryView::Loading.solves().is_none());
        let failed = HistoryView::Failed {
            error: "boom".to_string(),
        };
        assert!(failed.solves().is_none());
    }
}
