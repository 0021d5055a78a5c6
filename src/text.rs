//! Fitting text into the fixed row of cells.

use core::ops::Deref;

use heapless::Vec;

use crate::display::MAX_CELLS;

/// Where a short string sits within the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Padding {
    /// Text starts at the leftmost cell, blanks on the right.
    #[default]
    Right,
    /// Text ends at the rightmost cell, blanks on the left.
    Left,
    /// Centered, an odd blank goes to the right.
    Both,
}

/// Text returned by [`pad_text`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Padded<'a> {
    /// Already filled the row.
    Unchanged(&'a [u8]),
    Padded(Vec<u8, MAX_CELLS>),
}

impl Deref for Padded<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Padded::Unchanged(text) => text,
            Padded::Padded(buf) => buf,
        }
    }
}

/// Pad `text` with `fill` to `width` cells.
///
/// Text that already fills the row is returned as is.
pub fn pad_text(text: &[u8], width: usize, fill: u8, padding: Padding) -> Padded<'_> {
    let width = width.min(MAX_CELLS);
    if text.len() >= width {
        return Padded::Unchanged(text);
    }

    let pad = width - text.len();
    let offset = match padding {
        Padding::Right => 0,
        Padding::Left => pad,
        Padding::Both => pad / 2,
    };

    // width is bounded by the capacity
    let mut buf: Vec<u8, MAX_CELLS> = core::iter::repeat(fill).take(width).collect();
    buf[offset..offset + text.len()].copy_from_slice(text);

    Padded::Padded(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_padding() {
        assert_eq!(&*pad_text(b"AB", 10, b' ', Padding::Right), b"AB        ");
    }

    #[test]
    fn left_padding() {
        assert_eq!(&*pad_text(b"AB", 10, b' ', Padding::Left), b"        AB");
    }

    #[test]
    fn both_padding_biased_right() {
        assert_eq!(&*pad_text(b"A", 10, b'_', Padding::Both), b"____A_____");
        assert_eq!(&*pad_text(b"AB", 10, b'_', Padding::Both), b"____AB____");
    }

    #[test]
    fn full_width_is_unchanged() {
        let text = b"0123456789";
        for padding in [Padding::Right, Padding::Left, Padding::Both] {
            assert_eq!(pad_text(text, 10, b' ', padding), Padded::Unchanged(&text[..]));
        }
        let long = b"0123456789AB";
        assert_eq!(&*pad_text(long, 10, b' ', Padding::Left), &long[..]);
    }

    #[test]
    fn empty_text_is_all_fill() {
        assert_eq!(&*pad_text(b"", 4, b' ', Padding::Both), b"    ");
    }
}
