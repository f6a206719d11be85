//! Display driver implementations
//!
//! - PCD8544: 84x48 monochrome LCD controller (Nokia 5110/3310 modules)

pub mod pcd8544;

pub use pcd8544::{DriverError, Pcd8544, WriteMode, BUS_CLOCK_HZ};

#[cfg(feature = "embedded-hal")]
pub use pcd8544::EhalPcd8544;
