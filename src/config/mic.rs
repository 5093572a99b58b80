use crate::InvalidEnumValue;

/// Gain select bit that must accompany the PGA gain in `MICx_GAIN`.
pub(crate) const GAIN_ENABLE: u8 = 0x10;

/// Microphone bias voltage, written to both bias registers.
///
/// Pick the value from the microphone datasheet; most electret capsules are
/// fine with the highest setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MicBias {
  V2_18 = 0x00,
  V2_26 = 0x10,
  V2_36 = 0x20,
  V2_45 = 0x30,
  V2_55 = 0x40,
  V2_66 = 0x50,
  V2_78 = 0x60,
  V2_87 = 0x70,
}

impl From<MicBias> for u8 {
  fn from(v: MicBias) -> Self {
    v as u8
  }
}

impl TryFrom<u8> for MicBias {
  type Error = InvalidEnumValue;

  fn try_from(bits: u8) -> Result<Self, Self::Error> {
    match bits {
      0x00 => Ok(Self::V2_18),
      0x10 => Ok(Self::V2_26),
      0x20 => Ok(Self::V2_36),
      0x30 => Ok(Self::V2_45),
      0x40 => Ok(Self::V2_55),
      0x50 => Ok(Self::V2_66),
      0x60 => Ok(Self::V2_78),
      0x70 => Ok(Self::V2_87),
      other => Err(InvalidEnumValue(other)),
    }
  }
}

/// Analog PGA gain, applied to all four microphone channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MicGain {
  Db0 = 0,
  Db3 = 1,
  Db6 = 2,
  Db9 = 3,
  Db12 = 4,
  Db15 = 5,
  Db18 = 6,
  Db21 = 7,
  Db24 = 8,
  Db27 = 9,
  Db30 = 10,
  Db33 = 11,
  Db34_5 = 12,
  Db36 = 13,
  Db37_5 = 14,
}

impl MicGain {
  /// Register value including the gain select bit.
  pub const fn register(self) -> u8 {
    self as u8 | GAIN_ENABLE
  }
}

impl From<MicGain> for u8 {
  fn from(v: MicGain) -> Self {
    v as u8
  }
}

impl TryFrom<u8> for MicGain {
  type Error = InvalidEnumValue;

  fn try_from(step: u8) -> Result<Self, Self::Error> {
    match step {
      0 => Ok(Self::Db0),
      1 => Ok(Self::Db3),
      2 => Ok(Self::Db6),
      3 => Ok(Self::Db9),
      4 => Ok(Self::Db12),
      5 => Ok(Self::Db15),
      6 => Ok(Self::Db18),
      7 => Ok(Self::Db21),
      8 => Ok(Self::Db24),
      9 => Ok(Self::Db27),
      10 => Ok(Self::Db30),
      11 => Ok(Self::Db33),
      12 => Ok(Self::Db34_5),
      13 => Ok(Self::Db36),
      14 => Ok(Self::Db37_5),
      other => Err(InvalidEnumValue(other)),
    }
  }
}
