//! # Use Cases
//!
//! Application-level entry point for roster queries.
//!
//! - [`queries`]: [`RosterQueries`], which binds the pure domain queries to a
//!   [`Clock`](roster_ports::Clock) and a [`QueryConfig`](roster_domain::QueryConfig)
//!
//! Use cases depend on domain and ports only.

#![allow(clippy::multiple_crate_versions)]

pub mod queries;

pub use queries::RosterQueries;
