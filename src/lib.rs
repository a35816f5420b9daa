pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod reporting;
pub mod strategy;
pub mod types;
