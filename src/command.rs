//! Command Table
//!
//! HT162x frames start with a 3-bit prefix telling the chip how to parse the rest:
//!
//! - command: <<0b100:b3, CMD:u8, X:b1>>
//! - write:   <<0b101:b3, ADDR:b6, DATA:b4*n>>

/// Prefix of a command frame.
pub const PREFIX_COMMAND: u16 = 0b100;
/// Prefix of a write (data) frame.
pub const PREFIX_DATA: u16 = 0b101;

/// Width of the address field of a write frame.
pub const ADDRESS_BITS: u8 = 6;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// SYS DIS
    ///
    /// Turn off system oscillator and LCD bias generator [POR]
    SysDis = 0x00,
    /// SYS EN
    ///
    /// Turn on system oscillator
    SysEn = 0x01,
    /// LCD OFF
    ///
    /// Turn off LCD bias generator [POR]
    LcdOff = 0x02,
    /// LCD ON
    ///
    /// Turn on LCD bias generator
    LcdOn = 0x03,
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}
