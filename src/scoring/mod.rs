pub mod decision;
pub mod factors;
pub mod model;

pub use decision::{classify, Decision};
pub use factors::EmploymentStatus;
pub use model::{
    assess, monthly_payment, Applicant, FactorScores, LoanTerms, RiskAssessment,
};
