//! hp-core: shared foundation for hydroprofile.
//!
//! Contains:
//! - units (uom length types + constructors, display unit selection)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HpError, HpResult};
pub use numeric::*;
pub use units::*;
