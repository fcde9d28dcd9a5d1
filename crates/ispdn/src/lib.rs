pub mod assessment;
pub mod config;
pub mod document;
pub mod error;
pub mod telemetry;
