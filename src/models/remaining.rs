use std::fmt;

/// Remaining time until the adjusted departure, or overtime once it is past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub overtime: bool,
    pub hours: i64,
    pub minutes: i64,
}

impl Remaining {
    /// `"+"` in overtime, empty otherwise.
    pub fn sign(&self) -> &'static str {
        if self.overtime { "+" } else { "" }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} hrs {} mins", self.sign(), self.hours, self.minutes)
    }
}
