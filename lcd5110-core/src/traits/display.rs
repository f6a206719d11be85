//! Display operation trait for 84x48 dot-matrix panels

use crate::geometry::COLUMNS;

/// Operations exposed by a dot-matrix display driver
///
/// Implementations assume a single owner; nothing here is safe to call
/// from two threads at once, and callers must serialize access.
pub trait MonoDisplay {
    /// Error type for display operations
    type Error;

    /// Run the full power-on/init sequence; safe to repeat
    fn reinit(&mut self) -> Result<(), Self::Error>;

    /// Blank the whole display RAM and leave the address at end-of-frame
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the text cursor
    ///
    /// - `bank`: Text row (1-6)
    /// - `column`: Character column (1-14)
    ///
    /// Returns `Ok(false)` without any bus traffic if the position is out
    /// of range.
    fn cursor(&mut self, bank: u8, column: u8) -> Result<bool, Self::Error>;

    /// Switch the backlight
    fn backlight(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Complement subsequent data writes; existing content is unaffected
    fn inverse(&mut self, on: bool);

    /// Draw character codes at the current address
    ///
    /// Codes without a glyph are skipped. Returns the number drawn.
    fn print_bytes(&mut self, text: &[u8]) -> Result<usize, Self::Error>;

    /// Draw a string at the current address
    ///
    /// Characters without a glyph (including all non-ASCII) are skipped.
    /// Returns the number drawn.
    fn print_str(&mut self, text: &str) -> Result<usize, Self::Error>;

    /// Replace the whole display RAM with a 504-byte bank-major frame
    fn print_image(&mut self, pixels: &[u8]) -> Result<(), Self::Error>;
}

/// Helpers for common text layout
pub trait DisplayExt: MonoDisplay {
    /// Position the cursor and draw a string
    ///
    /// Returns `Ok(None)` if the position is rejected; nothing is drawn.
    fn print_at(&mut self, bank: u8, column: u8, text: &str) -> Result<Option<usize>, Self::Error> {
        if !self.cursor(bank, column)? {
            return Ok(None);
        }
        self.print_str(text).map(Some)
    }

    /// Blank one text row
    ///
    /// Returns `Ok(false)` if the bank is out of range.
    fn clear_bank(&mut self, bank: u8) -> Result<bool, Self::Error> {
        let blank = [b' '; COLUMNS];
        if !self.cursor(bank, 1)? {
            return Ok(false);
        }
        self.print_bytes(&blank)?;
        Ok(true)
    }
}

// Blanket implementation for all MonoDisplay types
impl<T: MonoDisplay> DisplayExt for T {}
