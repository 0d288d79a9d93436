use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry::Client;
use crate::scoring::{Decision, FactorScores, LoanTerms, RiskAssessment};

/// One scored application, as appended to the decision log. Client name is
/// denormalized so the log stays readable after a client is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_name: String,
    pub amount: f64,
    pub term_months: u32,
    pub purpose: String,
    /// Probability of default at the time of scoring.
    pub pd: f64,
    pub decision: Decision,
    /// The five factor sub-scores, kept for audit and explainability.
    pub scores: FactorScores,
    pub requested_at: DateTime<Utc>,
}

impl DecisionRecord {
    pub fn from_assessment(
        client: &Client,
        loan: &LoanTerms,
        purpose: &str,
        assessment: &RiskAssessment,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id: client.id,
            client_name: client.full_name(),
            amount: loan.principal,
            term_months: loan.term_months,
            purpose: purpose.to_string(),
            pd: assessment.pd,
            decision: assessment.decision,
            scores: assessment.scores,
            requested_at: Utc::now(),
        }
    }
}

/// Append-only log of scoring results. Records are never mutated or removed
/// once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionLog {
    pub version: u32,
    #[serde(default)]
    pub records: Vec<DecisionRecord>,
}

impl Default for DecisionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionLog {
    /// Create a new empty log with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            records: Vec::new(),
        }
    }

    pub fn append(&mut self, record: DecisionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DecisionRecord] {
        &self.records
    }
}
