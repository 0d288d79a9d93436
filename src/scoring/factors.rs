use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Employment categories recognized by the scoring model.
///
/// The enum is closed on purpose: the status-to-risk lookup below stays
/// exhaustive, so a new category cannot be added without choosing its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    /// Open-ended (permanent) contract
    Permanent,
    /// Fixed-term contract
    FixedTerm,
    SelfEmployed,
    Retired,
    Student,
}

impl EmploymentStatus {
    /// Risk contribution of the employment category, already in [0, 1].
    pub fn risk_score(self) -> f64 {
        match self {
            EmploymentStatus::Permanent => 0.1,
            EmploymentStatus::Retired => 0.2,
            EmploymentStatus::FixedTerm => 0.5,
            EmploymentStatus::SelfEmployed => 0.6,
            EmploymentStatus::Student => 0.8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentStatus::Permanent => "permanent",
            EmploymentStatus::FixedTerm => "fixed-term",
            EmploymentStatus::SelfEmployed => "self-employed",
            EmploymentStatus::Retired => "retired",
            EmploymentStatus::Student => "student",
        }
    }
}

/// Debt burden: monthly expenses over monthly income, where spending half of
/// the income is treated as maximum risk. Zero or negative income maps to the
/// maximum ratio rather than an error; the model deliberately absorbs bad
/// income data into the score.
pub fn debt_ratio_score(income: f64, expenses: f64) -> f64 {
    let ratio = if income > 0.0 { expenses / income } else { 1.0 };
    (ratio / 0.5).min(1.0)
}

/// Annualized loan payment over annual income, where committing 40% of income
/// to the loan is treated as maximum risk. Same zero-income policy as above.
pub fn credit_income_score(income: f64, monthly_payment: f64) -> f64 {
    let ratio = if income > 0.0 {
        (monthly_payment * 12.0) / (income * 12.0)
    } else {
        1.0
    };
    (ratio / 0.4).min(1.0)
}

/// Tenure risk: ten years in the current job is minimum risk, zero years is
/// maximum. Floored at 0 for tenures beyond ten years.
pub fn tenure_score(tenure_years: f64) -> f64 {
    (1.0 - tenure_years / 10.0).max(0.0)
}

/// Age risk buckets: under 25 riskiest, 25-55 inclusive optimal, over 55 in
/// between.
pub fn age_score(age: u32) -> f64 {
    if age < 25 {
        0.7
    } else if age <= 55 {
        0.2
    } else {
        0.4
    }
}
