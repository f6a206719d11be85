//! Board-agnostic protocol logic for PCD8544-class LCD controllers
//!
//! This crate contains everything about driving an 84x48 monochrome panel
//! that does not depend on a particular bus or board:
//!
//! - Panel geometry and its compile-time invariants
//! - The 5x8 glyph table
//! - Cursor to controller address translation
//! - Command byte encoding and the init sequence
//! - Configuration types
//! - Driver lifecycle state machine
//! - The display operation trait

#![no_std]
#![deny(unsafe_code)]

pub mod addressing;
pub mod command;
pub mod config;
pub mod font;
pub mod geometry;
pub mod state;
pub mod traits;

pub use addressing::{cursor_commands, Cursor};
pub use command::Contrast;
pub use config::{ChipSelect, ConfigError, DisplayConfig, DisplayPins};
pub use geometry::{FRAME_SIZE, HEIGHT, WIDTH};
pub use state::State;
pub use traits::{DisplayExt, MonoDisplay};
