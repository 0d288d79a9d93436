pub mod config;
pub mod decisions;
pub mod export;
pub mod output;
pub mod registry;
pub mod scoring;
