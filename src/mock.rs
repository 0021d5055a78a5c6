//! Test doubles for the bus and the controller RAM.

extern crate std;

use core::cell::RefCell;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::display::RAM_END;
use crate::interface::{DisplayError, DisplayInterface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Line {
    Cs,
    Wr,
    Data,
    Backlight,
}

/// One chip-select bracketed bit sequence, as sampled on WR rising edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub bits: Vec<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    Command(u8),
    Data { address: u8, value: u16, bits: u8 },
}

fn take_bits(bits: &[bool]) -> u16 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | b as u16)
}

impl Frame {
    pub fn decode(&self) -> Option<Decoded> {
        let bits = &self.bits;
        if bits.len() < 3 {
            return None;
        }
        match take_bits(&bits[..3]) {
            0b100 if bits.len() == 12 => Some(Decoded::Command(take_bits(&bits[3..11]) as u8)),
            0b101 if bits.len() > 9 && bits.len() <= 25 => Some(Decoded::Data {
                address: take_bits(&bits[3..9]) as u8,
                value: take_bits(&bits[9..]),
                bits: (bits.len() - 9) as u8,
            }),
            _ => None,
        }
    }
}

struct BusState {
    cs: bool,
    wr: bool,
    data: bool,
    backlight: Option<bool>,
    current: Option<Vec<bool>>,
    frames: Vec<Frame>,
    edges: usize,
    fail_data: bool,
}

/// Shared state behind a set of mock pins.
pub struct MockBus {
    state: RefCell<BusState>,
}

impl MockBus {
    pub fn new() -> Self {
        MockBus {
            state: RefCell::new(BusState {
                cs: true,
                wr: true,
                data: false,
                backlight: None,
                current: None,
                frames: Vec::new(),
                edges: 0,
                fail_data: false,
            }),
        }
    }

    /// CS, WR and DATA pins wired to this bus.
    pub fn pins(&self) -> (MockPin<'_>, MockPin<'_>, MockPin<'_>) {
        (
            MockPin { bus: self, line: Line::Cs },
            MockPin { bus: self, line: Line::Wr },
            MockPin { bus: self, line: Line::Data },
        )
    }

    pub fn backlight_pin(&self) -> MockPin<'_> {
        MockPin {
            bus: self,
            line: Line::Backlight,
        }
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.state.borrow().frames.clone()
    }

    pub fn clock_edges(&self) -> usize {
        self.state.borrow().edges
    }

    pub fn cs_is_high(&self) -> bool {
        self.state.borrow().cs
    }

    pub fn backlight(&self) -> Option<bool> {
        self.state.borrow().backlight
    }

    /// Make every following write to the DATA line fail.
    pub fn fail_data_line(&self) {
        self.state.borrow_mut().fail_data = true;
    }

    fn drive(&self, line: Line, level: bool) -> Result<(), ()> {
        let mut st = self.state.borrow_mut();
        match line {
            Line::Cs => {
                if st.cs && !level {
                    st.current = Some(Vec::new());
                } else if !st.cs && level {
                    if let Some(bits) = st.current.take() {
                        st.frames.push(Frame { bits });
                    }
                }
                st.cs = level;
            }
            Line::Wr => {
                if !st.wr && level {
                    st.edges += 1;
                    let data = st.data;
                    if let Some(bits) = st.current.as_mut() {
                        bits.push(data);
                    }
                }
                st.wr = level;
            }
            Line::Data => {
                if st.fail_data {
                    return Err(());
                }
                st.data = level;
            }
            Line::Backlight => st.backlight = Some(level),
        }
        Ok(())
    }
}

pub struct MockPin<'a> {
    bus: &'a MockBus,
    line: Line,
}

impl OutputPin for MockPin<'_> {
    type Error = ();

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.drive(self.line, false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.drive(self.line, true)
    }
}

#[derive(Default)]
pub struct MockDelay {
    pub total_us: u32,
}

impl DelayUs<u32> for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.total_us += us;
    }
}

/// Records frames and mirrors them into a simulated nibble RAM.
///
/// A `bits` wide write at `address` fills `bits / 4` consecutive nibbles,
/// most significant nibble first.
pub struct MockInterface {
    pub log: Vec<Decoded>,
    pub ram: [u8; RAM_END as usize],
}

impl MockInterface {
    pub fn new() -> Self {
        MockInterface {
            log: Vec::new(),
            ram: [0; RAM_END as usize],
        }
    }

    pub fn commands(&self) -> Vec<u8> {
        self.log
            .iter()
            .filter_map(|d| match d {
                Decoded::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// (address, value, bits) of every write frame.
    pub fn writes(&self) -> Vec<(u8, u16, u8)> {
        self.log
            .iter()
            .filter_map(|d| match *d {
                Decoded::Data {
                    address,
                    value,
                    bits,
                } => Some((address, value, bits)),
                _ => None,
            })
            .collect()
    }

    /// 16-bit pattern stored from `address` on.
    pub fn cell(&self, address: u8) -> u16 {
        (0..4).fold(0, |acc, k| {
            (acc << 4) | self.ram[(address as usize + k) % RAM_END as usize] as u16
        })
    }

    pub fn nibble(&self, address: u8) -> u8 {
        self.ram[address as usize]
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl DisplayInterface for MockInterface {
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.log.push(Decoded::Command(command));
        Ok(())
    }

    fn send_data(&mut self, address: u8, value: u16, bits: u8) -> Result<(), DisplayError> {
        self.log.push(Decoded::Data {
            address,
            value,
            bits,
        });
        let nibbles = bits / 4;
        for k in 0..nibbles {
            let shift = 4 * (nibbles - 1 - k);
            let slot = (address as usize + k as usize) % RAM_END as usize;
            self.ram[slot] = ((value >> shift) & 0xF) as u8;
        }
        Ok(())
    }
}
