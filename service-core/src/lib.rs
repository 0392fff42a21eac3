//! service-core: Shared infrastructure for the billed workspace.
pub mod config;
pub mod middleware;
pub mod observability;

pub use tracing;
