//! The display interface for HT162x LCD controllers.
//!
//! The chip is write-only here: frames are clocked in over CS/WR/DATA,
//! most significant bit first, data latched on the rising edge of WR.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::command::{ADDRESS_BITS, PREFIX_COMMAND, PREFIX_DATA};

/// Tclk min. on data sheet, overhead is more than this at low clock speeds.
pub const WRITE_DELAY_US: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    CSError,
    WRError,
    DataError,
    BacklightError,
}

/// Trait implemented by bus interfaces to provide the two HT162x frame types.
pub trait DisplayInterface {
    /// Send a command frame.
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError>;

    /// Send a write frame: `bits` of `value` stored from RAM `address` on.
    fn send_data(&mut self, address: u8, value: u16, bits: u8) -> Result<(), DisplayError>;
}

impl<T: DisplayInterface + ?Sized> DisplayInterface for &mut T {
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        T::send_command(self, command)
    }

    fn send_data(&mut self, address: u8, value: u16, bits: u8) -> Result<(), DisplayError> {
        T::send_data(self, address, value, bits)
    }
}

/// Bit-banged 3-wire interface.
pub struct SerialInterface<CS, WR, DATA, DELAY> {
    cs: CS,
    wr: WR,
    data: DATA,
    delay: DELAY,
    write_delay: u32,
}

impl<CS, WR, DATA, DELAY> SerialInterface<CS, WR, DATA, DELAY>
where
    CS: OutputPin,
    WR: OutputPin,
    DATA: OutputPin,
    DELAY: DelayUs<u32>,
{
    pub fn new(cs: CS, wr: WR, data: DATA, delay: DELAY) -> Self {
        SerialInterface {
            cs,
            wr,
            data,
            delay,
            write_delay: WRITE_DELAY_US,
        }
    }

    /// Override the time each clock phase is held.
    #[must_use]
    pub fn with_write_delay(mut self, us: u32) -> Self {
        self.write_delay = us;
        self
    }

    /// Consume the display interface and return
    /// the underlying GPIO pins and delay used by it
    pub fn release(self) -> (CS, WR, DATA, DELAY) {
        (self.cs, self.wr, self.data, self.delay)
    }

    /// Clock out the low `bits` of `value`, MSB first.
    pub fn write_bits(&mut self, value: u16, bits: u8) -> Result<(), DisplayError> {
        let bits = bits.min(16);
        if bits == 0 {
            return Ok(());
        }

        for i in (0..bits).rev() {
            self.wr.set_low().map_err(|_| DisplayError::WRError)?;
            self.delay.delay_us(self.write_delay);

            let level = if value & (1 << i) != 0 {
                self.data.set_high()
            } else {
                self.data.set_low()
            };
            level.map_err(|_| DisplayError::DataError)?;
            self.delay.delay_us(self.write_delay);

            self.wr.set_high().map_err(|_| DisplayError::WRError)?;
            self.delay.delay_us(self.write_delay);
        }

        self.delay.delay_us(self.write_delay);
        Ok(())
    }

    fn frame<F>(&mut self, f: F) -> Result<(), DisplayError>
    where
        F: FnOnce(&mut Self) -> Result<(), DisplayError>,
    {
        // Assert chip select pin
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;

        let ret = f(self);

        // Deassert chip select pin
        let released = self.cs.set_high().map_err(|_| DisplayError::CSError);

        ret.and(released)
    }
}

impl<CS, WR, DATA, DELAY> DisplayInterface for SerialInterface<CS, WR, DATA, DELAY>
where
    CS: OutputPin,
    WR: OutputPin,
    DATA: OutputPin,
    DELAY: DelayUs<u32>,
{
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.frame(|di| {
            di.write_bits(PREFIX_COMMAND, 3)?;
            di.write_bits(command as u16, 8)?;
            // padding bit, doesn't mean anything
            di.write_bits(1, 1)
        })
    }

    fn send_data(&mut self, address: u8, value: u16, bits: u8) -> Result<(), DisplayError> {
        self.frame(|di| {
            di.write_bits(PREFIX_DATA, 3)?;
            di.write_bits(address as u16, ADDRESS_BITS)?;
            di.write_bits(value, bits)
        })
    }
}
