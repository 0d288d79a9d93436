pub mod storage;
pub mod types;

pub use storage::{load_registry, save_registry};
pub use types::{Client, Registry};
