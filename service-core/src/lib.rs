//! service-core: Shared infrastructure for the portfolio backend services.
pub mod config;
pub mod error;
pub mod observability;
