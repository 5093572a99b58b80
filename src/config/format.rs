use crate::InvalidEnumValue;

/// Serial data port protocol used on the SDOUT pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceFormat {
  /// Philips I²S.
  StandardI2s,
  /// Left justified.
  LeftJustified,
  /// DSP/PCM mode A, MSB on the second BCLK after LRCK.
  DspA,
  /// DSP/PCM mode B, MSB on the first BCLK after LRCK.
  DspB,
}

impl InterfaceFormat {
  /// Protocol bits shared by the primary interface register and the 1xFS TDM
  /// enable in the secondary one. Both I²S flavours select the same pattern,
  /// as do both DSP modes.
  pub const fn pattern(self) -> u8 {
    match self {
      Self::StandardI2s | Self::LeftJustified => 0x02,
      Self::DspA | Self::DspB => 0x01,
    }
  }

  /// Raw format code used by vendor configuration tables.
  pub const fn code(self) -> u8 {
    match self {
      Self::StandardI2s => 0x00,
      Self::LeftJustified => 0x01,
      Self::DspA => 0x03,
      Self::DspB => 0x13,
    }
  }

  pub(crate) const fn name(self) -> &'static str {
    match self {
      Self::StandardI2s => "standard i2s",
      Self::LeftJustified => "left justified",
      Self::DspA => "DSP-A",
      Self::DspB => "DSP-B",
    }
  }
}

impl TryFrom<u8> for InterfaceFormat {
  type Error = InvalidEnumValue;

  fn try_from(code: u8) -> Result<Self, Self::Error> {
    match code {
      0x00 => Ok(Self::StandardI2s),
      0x01 => Ok(Self::LeftJustified),
      0x03 => Ok(Self::DspA),
      0x13 => Ok(Self::DspB),
      other => Err(InvalidEnumValue(other)),
    }
  }
}

/// Word length on the serial data port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitWidth {
  Bits16,
  Bits18,
  Bits20,
  Bits24,
  Bits32,
}

impl BitWidth {
  /// Word length field of the primary interface register.
  pub const fn bits(self) -> u8 {
    match self {
      Self::Bits16 => 0x60,
      Self::Bits18 => 0x40,
      Self::Bits20 => 0x20,
      Self::Bits24 => 0x00,
      Self::Bits32 => 0x80,
    }
  }

  pub const fn width(self) -> u8 {
    match self {
      Self::Bits16 => 16,
      Self::Bits18 => 18,
      Self::Bits20 => 20,
      Self::Bits24 => 24,
      Self::Bits32 => 32,
    }
  }
}

impl TryFrom<u8> for BitWidth {
  type Error = InvalidEnumValue;

  fn try_from(width: u8) -> Result<Self, Self::Error> {
    match width {
      16 => Ok(Self::Bits16),
      18 => Ok(Self::Bits18),
      20 => Ok(Self::Bits20),
      24 => Ok(Self::Bits24),
      32 => Ok(Self::Bits32),
      other => Err(InvalidEnumValue(other)),
    }
  }
}

/// Value of `SDP_INTERFACE1`: word length OR protocol pattern.
pub(crate) const fn interface1(format: InterfaceFormat, width: BitWidth) -> u8 {
  width.bits() | format.pattern()
}

/// Value of `SDP_INTERFACE2`: 1xFS TDM enable, or zero when TDM is off.
pub(crate) const fn interface2(format: InterfaceFormat, tdm: bool) -> u8 {
  if tdm {
    format.pattern()
  } else {
    0x00
  }
}
