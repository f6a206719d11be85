//! Display abstraction traits
//!
//! These traits define the interface between application code and the
//! controller driver.

pub mod display;

pub use display::{DisplayExt, MonoDisplay};
