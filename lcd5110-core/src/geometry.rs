//! Panel geometry
//!
//! The controller addresses display RAM in 8-pixel tall banks; each byte
//! written is one vertical column of a bank, bit 0 at the top.

/// Panel width in pixels
pub const WIDTH: usize = 84;

/// Panel height in pixels
pub const HEIGHT: usize = 48;

/// Pixel rows per bank (one data byte)
pub const BANK_HEIGHT: usize = 8;

/// Number of banks (text rows)
pub const BANKS: usize = HEIGHT / BANK_HEIGHT;

/// Columns in a glyph bitmap
pub const GLYPH_WIDTH: usize = 5;

/// Pixel columns per character cell (glyph plus one blank spacer)
pub const CELL_WIDTH: usize = GLYPH_WIDTH + 1;

/// Character cells per bank (text columns)
pub const COLUMNS: usize = WIDTH / CELL_WIDTH;

/// Bytes in a full frame of display RAM
pub const FRAME_SIZE: usize = WIDTH * HEIGHT / BANK_HEIGHT;

const _: () = assert!(WIDTH % CELL_WIDTH == 0, "width must hold whole character cells");
const _: () = assert!(HEIGHT % BANK_HEIGHT == 0, "height must hold whole banks");
const _: () = assert!(BANKS == 6 && COLUMNS == 14 && FRAME_SIZE == 504);
