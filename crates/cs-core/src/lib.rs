//! cs-core: stable foundation for the COM spline workspace.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact segment identifiers)
//! - units (uom time type + constructors)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CsError, CsResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
