#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `no_std` driver for the Everest ES7210 four-channel audio ADC.
//!
//! The ES7210 digitises up to four analog microphones and streams them over
//! I²S, left justified or DSP/TDM. This crate covers bring-up and static
//! configuration over I²C:
//!
//! - A linear bring-up [`State`] machine that takes the chip from reset to
//!   streaming with a fixed, observable write order
//! - Exact lookup of clock divider settings for a (sample rate, MCLK ratio)
//!   pair, failing before any bus traffic when the pair is unsupported
//! - Typed [`Config`] values instead of raw register bytes
//! - Blocking ([`Es7210`]) and async ([`Es7210Async`]) drivers on top of the
//!   `embedded-hal` / `embedded-hal-async` 1.0 I²C traits
//!
//! ```no_run
//! use embedded_hal::i2c::{I2c, SevenBitAddress};
//! use es7210::{Config, Es7210};
//!
//! fn example<I2C, E>(i2c: I2C) -> Result<(), es7210::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//! {
//!   let config = Config::default().with_sample_rate(48_000).with_mclk_ratio(256);
//!
//!   let mut codec = Es7210::new(i2c);
//!   codec.initialize(config)?;
//!   codec.set_volume(6)?;
//!   Ok(())
//! }
//! ```

#[macro_use]
mod fmt;

mod asynch;
mod coeff;
mod config;
mod init;
mod reg;
mod rw;
mod volume;

use core::fmt::{Debug, Display, Formatter};

use embedded_hal::i2c::{I2c, SevenBitAddress};

pub use asynch::Es7210Async;
pub use coeff::{coefficients, resolve, ClockCoefficient};
pub use config::{BitWidth, Config, InterfaceFormat, MicBias, MicGain};
pub use init::{Batch, RegWrite, Sequence, State};
pub use reg::*;
pub use volume::{volume_register, VOLUME_MAX_DB, VOLUME_MIN_DB};

/// Errors that can occur while configuring the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
  /// The (sample rate, MCLK ratio) pair has no entry in the clock table.
  UnsupportedClockRatio { sample_rate_hz: u32, mclk_ratio: u32 },
  /// A raw value does not name any variant of a configuration enum.
  InvalidEnumValue(u8),
  /// The requested volume does not fit the digital volume register.
  VolumeOutOfRange(i8),
  /// The operation needs a completed bring-up.
  NotEnabled,
}

impl<E: Debug> Display for Error<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::I2c(e) => write!(f, "i2c error: {e:?}"),
      Self::UnsupportedClockRatio { sample_rate_hz, mclk_ratio } => {
        write!(f, "unable to clock {sample_rate_hz} Hz from {mclk_ratio}x MCLK")
      }
      Self::InvalidEnumValue(raw) => write!(f, "invalid configuration value {raw:#04x}"),
      Self::VolumeOutOfRange(db) => write!(f, "volume {db} dB out of range"),
      Self::NotEnabled => f.write_str("codec not enabled"),
    }
  }
}

/// Raw value rejected by one of the configuration enums' `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidEnumValue(pub u8);

impl<E> From<InvalidEnumValue> for Error<E> {
  fn from(v: InvalidEnumValue) -> Self {
    Error::InvalidEnumValue(v.0)
  }
}

/// (sample rate, MCLK ratio) pair rejected by [`Sequence::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedClock {
  pub sample_rate_hz: u32,
  pub mclk_ratio: u32,
}

impl<E> From<UnsupportedClock> for Error<E> {
  fn from(v: UnsupportedClock) -> Self {
    Error::UnsupportedClockRatio { sample_rate_hz: v.sample_rate_hz, mclk_ratio: v.mclk_ratio }
  }
}

/// Blocking driver for the ES7210.
///
/// The driver owns the I²C peripheral. Create it with [`Es7210::new`] and call
/// [`Es7210::initialize`] with a [`Config`]; afterwards the digital volume can
/// be changed with [`Es7210::set_volume`]. A failed bring-up leaves the driver
/// in [`State::Failed`] until `initialize` succeeds again.
pub struct Es7210<I> {
  i2c: I,
  address: u8,
  state: State,
  progress: State,
}

impl<I, E> Es7210<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Create a driver for a chip at the default address (AD0 = AD1 = low).
  pub fn new(i2c: I) -> Self {
    Self::new_with_address(i2c, I2C_ADDR)
  }

  /// Create a driver for a chip strapped to another address.
  pub fn new_with_address(i2c: I, address: u8) -> Self {
    Self { i2c, address, state: State::Uninitialized, progress: State::Uninitialized }
  }

  /// Current bring-up state.
  pub fn state(&self) -> State {
    self.state
  }

  /// Last state the most recent bring-up completed, also after a failure.
  pub fn progress(&self) -> State {
    self.progress
  }

  pub fn address(&self) -> u8 {
    self.address
  }

  /// Give the I²C peripheral back.
  pub fn release(self) -> I {
    self.i2c
  }
}

#[cfg(test)]
extern crate std;
