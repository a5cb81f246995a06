//! bf-core: stable foundation for boilerflow.
//!
//! Contains:
//! - units (temperature conversions for the US-customary correlations)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BfError, BfResult};
pub use numeric::*;
pub use units::*;
