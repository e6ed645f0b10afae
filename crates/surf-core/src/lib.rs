//! surfgen core: error type, tolerances, and traits shared by every crate.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{Result, SurfError};
pub use tolerance::Tolerance;
