/******************************************************************************
 * Refer to the ES7210 datasheet and user guide for more information:         *
 * - http://www.everest-semi.com/pdf/ES7210%20PB.pdf                          *
 * ========================================================================== *
 *                        ES7210 - Registers & Memory Map                     *
*******************************************************************************/

/// 7-bit I²C address with AD1 = 0 and AD0 = 0.
pub const I2C_ADDR: u8 = 0x40;
/// 7-bit I²C address with AD1 = 0 and AD0 = 1.
pub const I2C_ADDR_AD0: u8 = 0x41;
/// 7-bit I²C address with AD1 = 1 and AD0 = 0.
pub const I2C_ADDR_AD1: u8 = 0x42;
/// 7-bit I²C address with AD1 = 1 and AD0 = 1.
pub const I2C_ADDR_AD0_AD1: u8 = 0x43;

/// Register addresses of the ES7210.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
  // Reset, clock tree and dividers (0x00..0x08)
  Reset = 0x00,
  ClockOff = 0x01,
  MainClk = 0x02,
  MasterClk = 0x03,
  LrckDivH = 0x04,
  LrckDivL = 0x05,
  PowerDown = 0x06,
  Osr = 0x07,
  ModeConfig = 0x08,

  // State machine timing (0x09..0x0A)
  TimeControl0 = 0x09,
  TimeControl1 = 0x0A,

  // Status and misc (0x0B..0x10)
  ChipStatus = 0x0B,
  InterruptControl = 0x0C,
  MiscControl = 0x0D,
  DmicControl = 0x10,

  // Serial data port (0x11..0x12)
  SdpInterface1 = 0x11,
  SdpInterface2 = 0x12,

  // Mute and ALC (0x13..0x1A)
  AdcAutomute = 0x13,
  Adc34Mute = 0x14,
  Adc12Mute = 0x15,
  AlcSelect = 0x16,
  AlcCommon1 = 0x17,
  Adc34AlcLevel = 0x18,
  Adc12AlcLevel = 0x19,
  AlcCommon2 = 0x1A,

  // Per-channel digital volume (0x1B..0x1E), note the reversed order
  Adc4MaxGain = 0x1B,
  Adc3MaxGain = 0x1C,
  Adc2MaxGain = 0x1D,
  Adc1MaxGain = 0x1E,

  // High pass filters (0x20..0x23)
  Adc34Hpf2 = 0x20,
  Adc34Hpf1 = 0x21,
  Adc12Hpf1 = 0x22,
  Adc12Hpf2 = 0x23,

  // Identification, read only (0x3D..0x3F)
  ChipId1 = 0x3D,
  ChipId0 = 0x3E,
  ChipVersion = 0x3F,

  // Analog front end (0x40..0x4C)
  Analog = 0x40,
  Mic12Bias = 0x41,
  Mic34Bias = 0x42,
  Mic1Gain = 0x43,
  Mic2Gain = 0x44,
  Mic3Gain = 0x45,
  Mic4Gain = 0x46,
  Mic1LowPower = 0x47,
  Mic2LowPower = 0x48,
  Mic3LowPower = 0x49,
  Mic4LowPower = 0x4A,
  Mic12PowerDown = 0x4B,
  Mic34PowerDown = 0x4C,
}

impl Reg {
  /// Microphone gain registers, channel 1 first.
  pub const MIC_GAIN: [Reg; 4] = [Reg::Mic1Gain, Reg::Mic2Gain, Reg::Mic3Gain, Reg::Mic4Gain];

  /// Microphone low power registers, channel 1 first.
  pub const MIC_LOW_POWER: [Reg; 4] = [Reg::Mic1LowPower, Reg::Mic2LowPower, Reg::Mic3LowPower, Reg::Mic4LowPower];

  /// Digital volume registers, channel 1 first.
  pub const MAX_GAIN: [Reg; 4] = [Reg::Adc1MaxGain, Reg::Adc2MaxGain, Reg::Adc3MaxGain, Reg::Adc4MaxGain];
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}
