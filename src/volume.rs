use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Es7210, Reg, State};

/// Lowest accepted volume, register value 0x01.
pub const VOLUME_MIN_DB: i8 = -95;
/// Highest accepted volume, register value 0xFF.
pub const VOLUME_MAX_DB: i8 = 32;

/// Register value at 0 dB, also the reset default.
const ZERO_DB: i16 = 0xBF;

/// Map a volume in dB to the `ADCx_MAX_GAIN` register value.
///
/// The register moves 0.5 dB per LSB, so one dB is two steps. Returns `None`
/// when the result would not fit the register.
pub fn volume_register(volume_db: i8) -> Option<u8> {
  u8::try_from(ZERO_DB + 2 * i16::from(volume_db)).ok()
}

/// Register value for `volume_db`, provided the bring-up has completed.
pub(crate) fn volume_value<E>(state: State, volume_db: i8) -> Result<u8, Error<E>> {
  if state != State::Enabled {
    return Err(Error::NotEnabled);
  }
  let value = volume_register(volume_db).ok_or(Error::VolumeOutOfRange(volume_db))?;
  debug!("es7210: volume {} dB -> {=u8:#x}", volume_db, value);
  Ok(value)
}

impl<I, E> Es7210<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Set the digital volume of all four channels.
  ///
  /// Accepts [`VOLUME_MIN_DB`]..=[`VOLUME_MAX_DB`]; other values fail with
  /// [`Error::VolumeOutOfRange`] and nothing is written.
  pub fn set_volume(&mut self, volume_db: i8) -> Result<(), Error<E>> {
    let value = volume_value(self.state, volume_db)?;
    for reg in Reg::MAX_GAIN {
      if let Err(e) = self.write_register(reg, value) {
        self.state = State::Failed;
        return Err(e);
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_db_is_reset_default() {
    assert_eq!(volume_register(0), Some(0xBF));
  }

  #[test]
  fn range_ends() {
    assert_eq!(volume_register(VOLUME_MIN_DB), Some(0x01));
    assert_eq!(volume_register(VOLUME_MAX_DB), Some(0xFF));
    assert_eq!(volume_register(-96), None);
    assert_eq!(volume_register(33), None);
    assert_eq!(volume_register(i8::MIN), None);
    assert_eq!(volume_register(i8::MAX), None);
  }

  #[test]
  fn volume_needs_enabled_state() {
    assert_eq!(volume_value::<()>(State::Enabled, 0), Ok(0xBF));
    assert_eq!(volume_value::<()>(State::ClockConfigured, 0), Err(Error::NotEnabled));
    assert_eq!(volume_value::<()>(State::Failed, 0), Err(Error::NotEnabled));
    assert_eq!(volume_value::<()>(State::Enabled, 33), Err(Error::VolumeOutOfRange(33)));
  }

  #[test]
  fn one_db_is_two_steps() {
    assert_eq!(volume_register(6), Some(0xCB));
    assert_eq!(volume_register(-6), Some(0xB3));
  }
}
