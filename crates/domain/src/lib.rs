//! # Domain
//!
//! Roster entities and the pure queries over them.
//!
//! - [`model`]: `Person`, `Student`, the mixed-roster `Individual` and the
//!   closed enums used as grouping keys
//! - [`analytics`]: filters, grouped counts, averages and rankings
//! - [`config`]: thresholds shared by the queries
//!
//! Nothing here reads the clock; operations that depend on age take the
//! reference date explicitly.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;

pub use config::{QueryConfig, QueryConfigBuilder};
