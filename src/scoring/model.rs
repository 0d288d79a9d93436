use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::decision::{classify, Decision};
use super::factors::{self, EmploymentStatus};

/// Nominal annual interest rate baked into the payment estimate.
pub const ANNUAL_RATE: f64 = 0.04;

/// Scoring inputs for one applicant. This is a read-only view; the registry
/// owns the full client record.
#[derive(Debug, Clone, Copy)]
pub struct Applicant {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub employment: EmploymentStatus,
    pub tenure_years: f64,
    pub age: u32,
}

/// The amount and duration of a requested loan. The stated purpose is kept on
/// the decision record but plays no part in scoring.
#[derive(Debug, Clone, Copy)]
pub struct LoanTerms {
    pub principal: f64,
    pub term_months: u32,
}

/// The five normalized risk factors, each in [0, 1] with 1 = maximum risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub debt_ratio: f64,
    pub credit_to_income: f64,
    pub employment: f64,
    pub tenure: f64,
    pub age: f64,
}

/// Scoring result for one (applicant, loan) pair. Immutable once produced;
/// this is the value the decision log records verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub scores: FactorScores,
    /// Combined probability of default, in [0, 1].
    pub pd: f64,
    pub decision: Decision,
}

/// One factor's share of the combined PD, for explaining a score.
#[derive(Debug, Clone)]
pub struct FactorContribution {
    pub label: &'static str,
    pub weight: f64,
    pub score: f64,
    pub weighted: f64,
}

/// Factor weight table. Kept as data rather than inlined arithmetic so the
/// weights stay auditable in one place; they must sum to 1.00.
pub const FACTOR_WEIGHTS: [(&str, f64, fn(&FactorScores) -> f64); 5] = [
    ("debt ratio", 0.30, |s: &FactorScores| s.debt_ratio),
    ("credit to income", 0.25, |s: &FactorScores| s.credit_to_income),
    ("employment", 0.20, |s: &FactorScores| s.employment),
    ("tenure", 0.15, |s: &FactorScores| s.tenure),
    ("age", 0.10, |s: &FactorScores| s.age),
];

/// Fixed monthly payment for a loan amortized at [`ANNUAL_RATE`] with monthly
/// compounding.
///
/// # Errors
///
/// Fails on non-positive principal or a zero-month term. Callers validate
/// user input before invoking; this is the backstop.
pub fn monthly_payment(principal: f64, term_months: u32) -> Result<f64> {
    // Negated comparison so a NaN principal is rejected too
    if !(principal > 0.0) {
        bail!("loan principal must be positive (got {})", principal);
    }
    if term_months == 0 {
        bail!("loan term must be at least one month");
    }

    let r = ANNUAL_RATE / 12.0;
    let n = f64::from(term_months);

    // Unreachable at the fixed 4% rate, but keeps the formula total if the
    // rate constant is ever changed.
    if r == 0.0 {
        return Ok(principal / n);
    }

    let growth = (1.0 + r).powf(n);
    Ok(principal * r * growth / (growth - 1.0))
}

/// Score one application: five weighted risk factors combined into a PD,
/// classified into a decision. Pure and deterministic; no I/O, no clock.
pub fn assess(applicant: &Applicant, loan: &LoanTerms) -> Result<RiskAssessment> {
    let payment = monthly_payment(loan.principal, loan.term_months)?;

    let scores = FactorScores {
        debt_ratio: factors::debt_ratio_score(
            applicant.monthly_income,
            applicant.monthly_expenses,
        ),
        credit_to_income: factors::credit_income_score(applicant.monthly_income, payment),
        employment: applicant.employment.risk_score(),
        tenure: factors::tenure_score(applicant.tenure_years),
        age: factors::age_score(applicant.age),
    };

    // The weighted sum of [0,1] terms cannot exceed 1, but the clamp stays as
    // a final safety step.
    let pd = FACTOR_WEIGHTS
        .into_iter()
        .map(|(_, weight, score)| weight * score(&scores))
        .sum::<f64>()
        .clamp(0.0, 1.0);

    Ok(RiskAssessment {
        scores,
        pd,
        decision: classify(pd),
    })
}

impl RiskAssessment {
    /// Per-factor breakdown of the PD, in weight-table order.
    pub fn breakdown(&self) -> Vec<FactorContribution> {
        FACTOR_WEIGHTS
            .into_iter()
            .map(|(label, weight, score)| {
                let s = score(&self.scores);
                FactorContribution {
                    label,
                    weight,
                    score: s,
                    weighted: weight * s,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_applicant() -> Applicant {
        Applicant {
            monthly_income: 750_000.0,
            monthly_expenses: 250_000.0,
            employment: EmploymentStatus::Permanent,
            tenure_years: 5.0,
            age: 35,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = FACTOR_WEIGHTS.iter().map(|(_, w, _)| w).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_monthly_payment_regression() {
        // 500k over 12 months at 4%/yr nominal, monthly compounding
        let payment = monthly_payment(500_000.0, 12).unwrap();
        assert!((payment - 42_574.95).abs() < 0.01);
    }

    #[test]
    fn test_monthly_payment_rejects_bad_input() {
        assert!(monthly_payment(0.0, 12).is_err());
        assert!(monthly_payment(-100.0, 12).is_err());
        assert!(monthly_payment(500_000.0, 0).is_err());
        assert!(monthly_payment(f64::NAN, 12).is_err());
    }

    #[test]
    fn test_assess_reference_scenario() {
        // income 750k, expenses 250k, permanent, 5y tenure, age 35,
        // 500k over 24 months
        let loan = LoanTerms {
            principal: 500_000.0,
            term_months: 24,
        };
        let result = assess(&sample_applicant(), &loan).unwrap();

        assert!((result.scores.debt_ratio - 0.666_666_7).abs() < 1e-6);
        assert_eq!(result.scores.employment, 0.1);
        assert_eq!(result.scores.tenure, 0.5);
        assert_eq!(result.scores.age, 0.2);
        // Recorded expected PD for this exact scenario
        assert!((result.pd - 0.333_093_7).abs() < 1e-6);
        assert_eq!(result.decision, Decision::Accept);
    }

    #[test]
    fn test_assess_zero_income_maxes_both_ratios() {
        let applicant = Applicant {
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            employment: EmploymentStatus::Student,
            tenure_years: 0.0,
            age: 20,
        };
        let loan = LoanTerms {
            principal: 100_000.0,
            term_months: 12,
        };
        let result = assess(&applicant, &loan).unwrap();
        assert_eq!(result.scores.debt_ratio, 1.0);
        assert_eq!(result.scores.credit_to_income, 1.0);
        // 0.30 + 0.25 + 0.8*0.20 + 1.0*0.15 + 0.7*0.10 = 0.93
        assert!((result.pd - 0.93).abs() < 1e-12);
        assert_eq!(result.decision, Decision::Reject);
    }

    #[test]
    fn test_assess_pd_bounded_under_extremes() {
        let applicant = Applicant {
            monthly_income: 1.0,
            monthly_expenses: 1e9,
            employment: EmploymentStatus::Student,
            tenure_years: 0.0,
            age: 18,
        };
        let loan = LoanTerms {
            principal: 1e12,
            term_months: 1,
        };
        let result = assess(&applicant, &loan).unwrap();
        assert!(result.pd >= 0.0 && result.pd <= 1.0);
        assert_eq!(result.decision, Decision::Reject);
    }

    #[test]
    fn test_assess_is_deterministic() {
        let loan = LoanTerms {
            principal: 500_000.0,
            term_months: 24,
        };
        let a = assess(&sample_applicant(), &loan).unwrap();
        let b = assess(&sample_applicant(), &loan).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_assess_propagates_invalid_loan() {
        let loan = LoanTerms {
            principal: -1.0,
            term_months: 24,
        };
        assert!(assess(&sample_applicant(), &loan).is_err());
    }

    #[test]
    fn test_breakdown_matches_pd() {
        let loan = LoanTerms {
            principal: 500_000.0,
            term_months: 24,
        };
        let result = assess(&sample_applicant(), &loan).unwrap();
        let breakdown = result.breakdown();
        assert_eq!(breakdown.len(), 5);
        let total: f64 = breakdown.iter().map(|c| c.weighted).sum();
        assert!((total - result.pd).abs() < 1e-12);
    }
}
