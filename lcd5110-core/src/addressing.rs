//! Display RAM addressing
//!
//! Text positions are 1-based (bank, column) pairs. The controller wants a
//! Y-address command (bank) followed by an X-address command (pixel
//! column), each tagged with its own high bit.

use crate::geometry::{BANKS, CELL_WIDTH, COLUMNS};

/// Tag for the set-Y-address command
pub const SET_Y_ADDRESS: u8 = 0x40;

/// Tag for the set-X-address command
pub const SET_X_ADDRESS: u8 = 0x80;

/// Text cursor position
///
/// Both coordinates are 1-based: bank in 1..=6, column in 1..=14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    bank: u8,
    column: u8,
}

impl Cursor {
    /// Top-left character cell
    pub const HOME: Self = Self { bank: 1, column: 1 };

    /// Create a cursor, rejecting out-of-range positions
    pub const fn new(bank: u8, column: u8) -> Option<Self> {
        if bank < 1 || bank as usize > BANKS || column < 1 || column as usize > COLUMNS {
            return None;
        }
        Some(Self { bank, column })
    }

    /// Bank (text row), 1-based
    pub const fn bank(&self) -> u8 {
        self.bank
    }

    /// Character column, 1-based
    pub const fn column(&self) -> u8 {
        self.column
    }

    /// First pixel column of this character cell
    pub const fn pixel_x(&self) -> u8 {
        (self.column - 1) * CELL_WIDTH as u8
    }

    /// The two address commands selecting this position
    pub const fn commands(&self) -> [u8; 2] {
        [
            SET_Y_ADDRESS | (self.bank - 1),
            SET_X_ADDRESS | self.pixel_x(),
        ]
    }
}

/// Address commands for a (bank, column) position
///
/// Returns `None` if either coordinate is out of range.
pub const fn cursor_commands(bank: u8, column: u8) -> Option<[u8; 2]> {
    match Cursor::new(bank, column) {
        Some(cursor) => Some(cursor.commands()),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_home() {
        assert_eq!(Cursor::new(1, 1), Some(Cursor::HOME));
        assert_eq!(Cursor::HOME.commands(), [0x40, 0x80]);
    }

    #[test]
    fn test_last_cell() {
        let cursor = Cursor::new(6, 14).unwrap();
        assert_eq!(cursor.pixel_x(), 78);
        assert_eq!(cursor.commands(), [0x45, 0x80 | 78]);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(cursor_commands(0, 1), None);
        assert_eq!(cursor_commands(1, 0), None);
        assert_eq!(cursor_commands(7, 1), None);
        assert_eq!(cursor_commands(1, 15), None);
        assert_eq!(cursor_commands(255, 255), None);
    }

    proptest! {
        #[test]
        fn prop_valid_positions(bank in 1u8..=6, column in 1u8..=14) {
            let cmds = cursor_commands(bank, column).unwrap();
            prop_assert_eq!(cmds[0], 0x40 | (bank - 1));
            prop_assert_eq!(cmds[1], 0x80 | ((column - 1) * 6));
        }

        #[test]
        fn prop_invalid_positions(bank in any::<u8>(), column in any::<u8>()) {
            prop_assume!(!(1..=6).contains(&bank) || !(1..=14).contains(&column));
            prop_assert!(cursor_commands(bank, column).is_none());
        }
    }
}
