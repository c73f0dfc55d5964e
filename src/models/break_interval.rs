use super::Millis;
use serde::{Deserialize, Serialize};

/// An ad-hoc pause. `end == None` means the break is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    pub start: Millis,
    #[serde(default)]
    pub end: Option<Millis>,
}

impl BreakInterval {
    pub fn open(start: Millis) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Length of the break; an open break is measured up to `now`.
    pub fn duration_until(&self, now: Millis) -> Millis {
        self.end.unwrap_or(now).saturating_sub(self.start)
    }
}
