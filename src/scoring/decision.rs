use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// PD at or above this goes to manual analysis.
pub const REFER_THRESHOLD: f64 = 0.35;
/// PD at or above this is rejected outright.
pub const REJECT_THRESHOLD: f64 = 0.60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    Accept,
    Refer,
    Reject,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Decision::Accept => "Accepted",
            Decision::Refer => "Refer for analysis",
            Decision::Reject => "Rejected",
        };
        write!(f, "{}", label)
    }
}

/// Map a PD to the three-way decision. A boundary value lands in the
/// higher-risk bucket: exactly 0.35 refers, exactly 0.60 rejects.
pub fn classify(pd: f64) -> Decision {
    if pd < REFER_THRESHOLD {
        Decision::Accept
    } else if pd < REJECT_THRESHOLD {
        Decision::Refer
    } else {
        Decision::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_step_function() {
        assert_eq!(classify(0.0), Decision::Accept);
        assert_eq!(classify(0.349_999), Decision::Accept);
        assert_eq!(classify(0.35), Decision::Refer);
        assert_eq!(classify(0.599_999), Decision::Refer);
        assert_eq!(classify(0.6), Decision::Reject);
        assert_eq!(classify(1.0), Decision::Reject);
    }

    #[test]
    fn test_decision_labels() {
        assert_eq!(Decision::Accept.to_string(), "Accepted");
        assert_eq!(Decision::Refer.to_string(), "Refer for analysis");
        assert_eq!(Decision::Reject.to_string(), "Rejected");
    }
}
