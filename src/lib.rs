//! fitmarket — client library for a training-program marketplace.
//!
//! Single-crate library providing invite resolution, program feeds,
//! creator analytics and a local cache of joined programs, over an
//! HTTP marketplace gateway.

// Foundation types
pub mod id_gen;
pub mod time_utils;

// Core types
pub mod analytics;
pub mod config;
pub mod constants;
pub mod error;
pub mod policy;
pub mod post;
pub mod program;

// Sub-systems
pub mod flows;
pub mod gateway;
pub mod storage;
pub mod tracing_init;

#[cfg(test)]
pub mod test_helpers;

// Re-exports for convenience
pub use error::{MarketError, MarketResult};
pub use gateway::{MarketplaceGateway, MarketplaceHost, ProgramCache};
pub use program::ProgramSummary;
