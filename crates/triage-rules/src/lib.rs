//! Rule-based symptom triage: a symptom catalog, an ordered condition rule
//! base, and a diagnosis engine that ranks conditions by symptom coverage.

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod knowledge;
pub mod telemetry;
