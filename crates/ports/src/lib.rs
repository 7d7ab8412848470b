//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`clock`]: the current calendar date, used to derive ages at query time
//!
//! These ports keep the query layer independent of the system clock.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
