//! Data models for the job listing portal.
//!
//! These models match the frontend TypeScript interfaces for seamless interoperability.

mod criteria;
mod job;
mod stats;

pub use criteria::*;
pub use job::*;
pub use stats::*;
