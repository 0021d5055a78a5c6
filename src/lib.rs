#![cfg_attr(not(test), no_std)]

//! Driver for 16-segment LCD panels behind an HT1622 style controller,
//! such as the 10 character DM8BA10.
//!
//! The controller is write-only and is fed over a 3-wire bus (CS, WR, DATA),
//! see [interface::SerialInterface]. [Lcd] keeps a cursor and renders text
//! through a [charset::Charset].

pub mod charset;
pub mod command;
pub mod display;
pub mod effects;
pub mod interface;
pub mod text;

mod builder;
pub use builder::*;

#[cfg(test)]
mod mock;

use core::marker::PhantomData;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use charset::Charset;
use command::Command;
use display::{Layout, CELL_STRIDE, RAM_END};
pub use display::DM8BA10;
pub use interface::{DisplayError, DisplayInterface, SerialInterface};
pub use text::{Padded, Padding};

/// Display driver structure.
pub struct Lcd<DI, L, C, BL = NoBacklight>
where
    DI: DisplayInterface,
    L: Layout,
    C: Charset,
    BL: OutputPin,
{
    di: DI,
    charset: C,
    backlight: Option<BL>,
    /// Cursor, always below `L::WIDTH`.
    position: usize,
    _layout: PhantomData<L>,
}

impl<DI, L, C, BL> Lcd<DI, L, C, BL>
where
    DI: DisplayInterface,
    L: Layout,
    C: Charset,
    BL: OutputPin,
{
    /// Number of character cells.
    pub fn width(&self) -> usize {
        L::WIDTH
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn charset(&self) -> &C {
        &self.charset
    }

    pub fn charset_mut(&mut self) -> &mut C {
        &mut self.charset
    }

    /// Let the charset rewrite `text` in place, returns the new length.
    pub fn remap(&self, text: &mut [u8]) -> usize {
        self.charset.remap(text)
    }

    /// Releases the display interface, charset and backlight pin.
    pub fn release(self) -> (DI, C, Option<BL>) {
        (self.di, self.charset, self.backlight)
    }

    /// Turns all the segments off and resets the cursor.
    pub fn clear_display(&mut self) -> Result<(), DisplayError> {
        self.position = 0;
        self.all_segments(false)
    }

    /// Moves the cursor. `0` is the leftmost cell, `-1` the rightmost.
    ///
    /// Out of range positions are clamped.
    pub fn set_position(&mut self, pos: i8) -> usize {
        self.position = Self::resolve(pos);
        self.position
    }

    fn resolve(pos: i8) -> usize {
        let width = L::WIDTH as isize;
        let mut pos = pos as isize;
        if pos < 0 {
            pos += width;
        }
        pos.clamp(0, width - 1) as usize
    }

    pub fn system_oscillator(&mut self, on: bool) -> Result<(), DisplayError> {
        let cmd = if on { Command::SysEn } else { Command::SysDis };
        self.di.send_command(cmd.into())
    }

    pub fn lcd(&mut self, on: bool) -> Result<(), DisplayError> {
        let cmd = if on { Command::LcdOn } else { Command::LcdOff };
        self.di.send_command(cmd.into())
    }

    /// No-op when built without a backlight pin.
    pub fn backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        if let Some(pin) = self.backlight.as_mut() {
            let ret = if on { pin.set_high() } else { pin.set_low() };
            ret.map_err(|_| DisplayError::BacklightError)?;
        }
        Ok(())
    }

    /// Switches every segment of the controller RAM on or off.
    pub fn all_segments(&mut self, on: bool) -> Result<(), DisplayError> {
        let pattern = if on { 0xFFFF } else { 0x0000 };
        for addr in (0..RAM_END).step_by(CELL_STRIDE) {
            self.di.send_data(addr, pattern, 16)?;
        }
        Ok(())
    }

    fn write_cell(&mut self, pos: usize, bits: u16) -> Result<(), DisplayError> {
        match L::cell_address(pos) {
            Some(addr) => self.di.send_data(addr, bits, 16),
            None => Ok(()),
        }
    }

    /// Lights exactly the segments set in `bits` at `pos`, bypassing the charset.
    pub fn draw_char(&mut self, bits: u16, pos: i8) -> Result<(), DisplayError> {
        self.write_cell(Self::resolve(pos), bits)
    }

    /// Shows character `code` at `pos`, or at the cursor.
    ///
    /// Doesn't move the cursor.
    pub fn set_char(&mut self, code: u8, pos: Option<i8>) -> Result<(), DisplayError> {
        let pos = pos.map_or(self.position, Self::resolve);
        let bits = self.charset.lookup(code);
        self.write_cell(pos, bits)
    }

    /// Prints `text` from `pos` (or the cursor) up to the end of the text or the row,
    /// returning the number of characters written.
    ///
    /// Cells after the text keep whatever they showed before, use [Self::println]
    /// to rewrite the whole row. The cursor wraps to 0 only when the row is full.
    pub fn print<T: AsRef<[u8]>>(
        &mut self,
        text: T,
        pos: Option<i8>,
    ) -> Result<usize, DisplayError> {
        if let Some(pos) = pos {
            self.set_position(pos);
        }

        let room = L::WIDTH - self.position;
        let mut written = 0;
        for &code in text.as_ref().iter().take(room) {
            self.set_char(code, None)?;
            self.position += 1;
            written += 1;
        }

        if self.position >= L::WIDTH {
            self.position = 0;
        }

        Ok(written)
    }

    /// Rewrites every cell with `text` padded to the row, and resets the cursor.
    pub fn println<T: AsRef<[u8]>>(
        &mut self,
        text: T,
        padding: Padding,
    ) -> Result<(), DisplayError> {
        let blank = self.charset.starting_code();
        let padded = crate::text::pad_text(text.as_ref(), L::WIDTH, blank, padding);

        for (pos, &code) in padded.iter().take(L::WIDTH).enumerate() {
            self.position = pos;
            self.set_char(code, None)?;
        }

        self.position = 0;
        Ok(())
    }

    /// Renders one full row of `text` looped with a blank, starting at `start`.
    ///
    /// Call again with `start + 1` for the next scroll step.
    pub fn scroll<T: AsRef<[u8]>>(&mut self, text: T, start: usize) -> Result<(), DisplayError> {
        let text = text.as_ref();
        let blank = self.charset.starting_code();
        // text plus one blank is a full turn
        let mut cursor = start.min(text.len());

        for pos in 0..L::WIDTH {
            self.position = pos;
            let code = text.get(cursor).copied().unwrap_or(blank);
            self.set_char(code, None)?;

            // one blank after the end, then start all over again
            cursor = if cursor >= text.len() { 0 } else { cursor + 1 };
        }

        self.position = 0;
        Ok(())
    }

    /// Turns the decimal point `index` (counted from the left) on or off.
    ///
    /// Only the nibble of its cluster is written, points in other clusters are kept.
    pub fn point(&mut self, index: u8, on: bool) -> Result<(), DisplayError> {
        if L::POINT_CLUSTERS.is_empty() {
            return Ok(());
        }

        match L::point_address(index as usize, on) {
            // just write accurately to 4-bit memory segment
            Some((addr, bits)) => self.di.send_data(addr, bits as u16, 4),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("point {} out of range", index);
                Ok(())
            }
        }
    }

    /// Shows decimal point `index`, turning off all others.
    pub fn set_point(&mut self, index: u8) -> Result<(), DisplayError> {
        self.reset_points()?;
        self.point(index, true)
    }

    /// Turns off all the decimal points.
    pub fn reset_points(&mut self) -> Result<(), DisplayError> {
        // a 16-bit write spans 4 addresses, i.e. two clusters
        for &addr in L::POINT_CLUSTERS.iter().step_by(2) {
            self.di.send_data(addr, 0, 16)?;
        }
        Ok(())
    }

    /// Returns `text` padded with blanks to fill all the cells.
    pub fn pad_string<'a>(&self, text: &'a [u8], padding: Padding) -> Padded<'a> {
        crate::text::pad_text(text, L::WIDTH, self.charset.starting_code(), padding)
    }

    /// Draws each frame of `frames` at `pos`, waiting `frame_us` after each one.
    pub fn play<DELAY>(
        &mut self,
        frames: &[u16],
        pos: i8,
        delay: &mut DELAY,
        frame_us: u32,
    ) -> Result<(), DisplayError>
    where
        DELAY: DelayUs<u32>,
    {
        for &frame in frames {
            self.draw_char(frame, pos)?;
            delay.delay_us(frame_us);
        }
        Ok(())
    }
}
