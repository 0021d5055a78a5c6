//! [super::Lcd] builder module

use core::marker::PhantomData;

use embedded_hal::digital::v2::OutputPin;

use crate::{
    charset::Charset,
    command::Command,
    display::{Layout, MAX_CELLS},
    interface::{DisplayError, DisplayInterface},
    Lcd,
};

/// Builder for [Lcd] instances.
pub struct Builder<DI, L, C, BL> {
    di: DI,
    charset: C,
    backlight: Option<BL>,
    _layout: PhantomData<L>,
}

impl<DI, L, C> Builder<DI, L, C, NoBacklight>
where
    DI: DisplayInterface,
    L: Layout,
    C: Charset,
{
    /// The charset is owned by the display until [Lcd::release].
    #[must_use]
    pub fn new(_layout: L, di: DI, charset: C) -> Self {
        Self {
            di,
            charset,
            backlight: None,
            _layout: PhantomData,
        }
    }
}

impl<DI, L, C, BL> Builder<DI, L, C, BL>
where
    DI: DisplayInterface,
    L: Layout,
    C: Charset,
    BL: OutputPin,
{
    #[must_use]
    pub fn backlight_pin<BL2: OutputPin>(self, backlight: BL2) -> Builder<DI, L, C, BL2> {
        Builder {
            di: self.di,
            charset: self.charset,
            backlight: Some(backlight),
            _layout: PhantomData,
        }
    }

    /// Start the oscillator, blank the RAM, then turn the LCD on.
    pub fn init(self) -> Result<Lcd<DI, L, C, BL>, InitError> {
        if L::WIDTH == 0 || L::WIDTH > MAX_CELLS {
            return Err(InitError::InvalidConfiguration(
                ConfigurationError::InvalidCellCount,
            ));
        }
        if !L::fits_ram() {
            return Err(InitError::InvalidConfiguration(
                ConfigurationError::InvalidAddress,
            ));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("init {} cells, {} points", L::WIDTH, L::POINTS);

        let mut lcd = Lcd {
            di: self.di,
            charset: self.charset,
            backlight: self.backlight,
            position: 0,
            _layout: PhantomData,
        };

        lcd.di.send_command(Command::SysEn.into())?;
        // clear the RAM before turning on LCD
        lcd.clear_display()?;
        lcd.di.send_command(Command::LcdOn.into())?;

        Ok(lcd)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    Interface(DisplayError),
    InvalidConfiguration(ConfigurationError),
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    InvalidCellCount,
    /// A cell or point cluster lies outside the controller RAM.
    InvalidAddress,
}

impl From<DisplayError> for InitError {
    fn from(value: DisplayError) -> Self {
        InitError::Interface(value)
    }
}

/// Placeholder for panels without a backlight line.
pub enum NoBacklight {}

impl OutputPin for NoBacklight {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }
}
