//! st-core: shared foundation for the surface-tension browser.
//!
//! Contains:
//! - numeric (Real + series helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
