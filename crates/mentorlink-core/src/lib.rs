//! Shared HTTP plumbing for the mentorlink service.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
