use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-day break state, derived from the last element of the break list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakState {
    Idle,
    OnBreak,
}

impl fmt::Display for BreakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakState::Idle => write!(f, "working"),
            BreakState::OnBreak => write!(f, "on break"),
        }
    }
}

/// How `break start` / `break end` react to a state they don't expect.
///
/// - `Permissive`: a second start opens another break, an end without an
///   open break rewrites the list unchanged.
/// - `Strict`: start while on break is an error, end while idle does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakPolicy {
    #[default]
    Permissive,
    Strict,
}
