//! Character sets.
//!
//! A charset turns a character code into the 16-bit segment pattern of a cell.
//!
//! Segment bits, as seen on the glass:
//!
//! ```text
//!  ---F---  ---7---
//! |\     | |     /|
//! D E    6 6    4 5
//! |  \   | |   /  |
//!  ---C---  ---3---
//! |  /   | |   \  |
//! 9 B    A A    2 1
//! |/     | |     \|
//!  ---8---  ---0---
//! ```

pub use self::cyrillic::*;

mod cyrillic;

pub trait Charset {
    /// Segment pattern of the glyph at `index`, defined for `index < size()`.
    fn glyph(&self, index: u16) -> u16;

    /// Number of glyphs in the table.
    fn size(&self) -> u16;

    /// Shown instead of characters missing from the table.
    fn fallback(&self) -> u16 {
        0xFFFF
    }

    /// Character code of glyph 0, also used as the blank for padding.
    fn starting_code(&self) -> u8 {
        0x20
    }

    /// Rewrite `text` in place before printing and return its new length.
    ///
    /// Override to fold multi-byte encodings into table codes, close gaps, etc.
    fn remap(&self, text: &mut [u8]) -> usize {
        text.len()
    }

    /// Segment pattern for character `code`.
    fn lookup(&self, code: u8) -> u16 {
        match code.checked_sub(self.starting_code()) {
            Some(index) if u16::from(index) < self.size() => self.glyph(index.into()),
            _ => self.fallback(),
        }
    }
}
