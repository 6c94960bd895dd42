//! dk-core: numeric foundation for diodekit.
//!
//! Contains:
//! - units (uom SI electrical types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
