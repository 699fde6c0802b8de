//! `bizcase-core`: shared building blocks for the business-case engine.
//!
//! This crate contains **pure** primitives (no IO, no logging setup): the error
//! taxonomy and the warning flags attached to computed metrics.

pub mod error;
pub mod warning;

pub use error::{DomainError, DomainResult, Metric, MetricError};
pub use warning::MetricWarning;
