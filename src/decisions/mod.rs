pub mod filter;
pub mod stats;
pub mod storage;
pub mod types;

pub use filter::DecisionFilter;
pub use stats::{summarize, LogSummary};
pub use storage::{load_log, save_log};
pub use types::{DecisionLog, DecisionRecord};
