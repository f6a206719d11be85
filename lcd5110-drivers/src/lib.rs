//! Hardware driver implementations
//!
//! This crate provides the concrete PCD8544 driver implementing the
//! display trait defined in lcd5110-core. It is generic over the
//! `SpiBus` and `GpioPort` capabilities from lcd5110-hal; with the
//! `embedded-hal` feature those can be built from embedded-hal 1.0
//! peripherals.

#![no_std]
#![deny(unsafe_code)]

pub mod display;

pub use display::{DriverError, Pcd8544, WriteMode, BUS_CLOCK_HZ};

#[cfg(feature = "embedded-hal")]
pub use display::EhalPcd8544;
