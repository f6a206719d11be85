//! LCD5110 Hardware Abstraction Layer
//!
//! This crate defines the two capabilities the display driver consumes.
//! Board support code implements them once and hands them to the driver,
//! so the driver never touches global pin-numbering state.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lcd5110-drivers (Pcd8544 driver)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcd5110-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  ehal module  │       │  board HAL /  │
//! │ (embedded-hal)│       │  test fakes   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiBus`] - Serial channel: open, close, clock rate, transfer
//! - [`gpio::GpioPort`] - Discrete output lines addressed by pin number

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "embedded-hal")]
pub mod ehal;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::{GpioPort, Level, PinId};
pub use spi::{BusAddress, SpiBus};
