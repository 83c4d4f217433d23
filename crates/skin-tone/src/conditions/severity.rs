//! Three-band severity for 0-100 scores.

/// Severity band of a condition score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Below 33
    Low,
    /// 33 to 65
    Moderate,
    /// 66 and above
    High,
}

impl Severity {
    pub fn from_score(score: u8) -> Self {
        if score >= 66 {
            Severity::High
        } else if score >= 33 {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }
}
