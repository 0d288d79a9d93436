use super::types::DecisionRecord;
use crate::scoring::Decision;

/// Portfolio summary over the decision log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSummary {
    pub total: usize,
    pub accepted: usize,
    pub referred: usize,
    pub rejected: usize,
    /// Sum of loan amounts over accepted applications only.
    pub accepted_amount: f64,
    /// Mean PD across all records, 0.0 for an empty log.
    pub mean_pd: f64,
}

pub fn summarize(records: &[DecisionRecord]) -> LogSummary {
    let accepted = records
        .iter()
        .filter(|r| r.decision == Decision::Accept)
        .count();
    let referred = records
        .iter()
        .filter(|r| r.decision == Decision::Refer)
        .count();
    let rejected = records
        .iter()
        .filter(|r| r.decision == Decision::Reject)
        .count();

    let accepted_amount = records
        .iter()
        .filter(|r| r.decision == Decision::Accept)
        .map(|r| r.amount)
        .sum();

    let mean_pd = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.pd).sum::<f64>() / records.len() as f64
    };

    LogSummary {
        total: records.len(),
        accepted,
        referred,
        rejected,
        accepted_amount,
        mean_pd,
    }
}
