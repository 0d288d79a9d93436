use uuid::Uuid;

use super::types::DecisionRecord;
use crate::scoring::Decision;

/// Criteria for narrowing a decision listing. Empty filter matches all.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionFilter {
    pub decision: Option<Decision>,
    pub client_id: Option<Uuid>,
}

impl DecisionFilter {
    pub fn matches(&self, record: &DecisionRecord) -> bool {
        if let Some(decision) = self.decision {
            if record.decision != decision {
                return false;
            }
        }
        if let Some(client_id) = self.client_id {
            if record.client_id != client_id {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, records: &'a [DecisionRecord]) -> Vec<&'a DecisionRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
