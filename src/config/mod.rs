mod format;
mod mic;

pub(crate) use format::{interface1, interface2};
pub use format::{BitWidth, InterfaceFormat};
pub use mic::{MicBias, MicGain};

/// Static codec configuration applied by [`crate::Es7210::initialize`].
///
/// All fields are plain values; the closed enums make a half-selected bit
/// width or format impossible to express. Construct it from
/// [`Config::default`] and adjust with the `with_*` helpers.
///
/// # Example
/// ```no_run
/// use es7210::{BitWidth, Config, InterfaceFormat, MicGain};
///
/// let config = Config::default()
///   .with_sample_rate(48_000)
///   .with_mclk_ratio(256)
///   .with_format(InterfaceFormat::LeftJustified)
///   .with_bit_width(BitWidth::Bits24)
///   .with_mic_gain(MicGain::Db24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  pub sample_rate_hz: u32,
  /// MCLK frequency divided by the sample rate, typically 256, 384 or 768.
  pub mclk_ratio: u32,
  pub format: InterfaceFormat,
  pub bit_width: BitWidth,
  pub mic_bias: MicBias,
  pub mic_gain: MicGain,
  /// Enable 1xFS TDM so all four channels share one SDOUT line.
  pub tdm: bool,
}

impl Config {
  pub const fn new(
    sample_rate_hz: u32,
    mclk_ratio: u32,
    format: InterfaceFormat,
    bit_width: BitWidth,
    mic_bias: MicBias,
    mic_gain: MicGain,
    tdm: bool,
  ) -> Self {
    Self { sample_rate_hz, mclk_ratio, format, bit_width, mic_bias, mic_gain, tdm }
  }

  pub const fn with_sample_rate(mut self, sample_rate_hz: u32) -> Self {
    self.sample_rate_hz = sample_rate_hz;
    self
  }

  pub const fn with_mclk_ratio(mut self, mclk_ratio: u32) -> Self {
    self.mclk_ratio = mclk_ratio;
    self
  }

  pub const fn with_format(mut self, format: InterfaceFormat) -> Self {
    self.format = format;
    self
  }

  pub const fn with_bit_width(mut self, bit_width: BitWidth) -> Self {
    self.bit_width = bit_width;
    self
  }

  pub const fn with_mic_bias(mut self, mic_bias: MicBias) -> Self {
    self.mic_bias = mic_bias;
    self
  }

  pub const fn with_mic_gain(mut self, mic_gain: MicGain) -> Self {
    self.mic_gain = mic_gain;
    self
  }

  pub const fn with_tdm(mut self, tdm: bool) -> Self {
    self.tdm = tdm;
    self
  }

  /// MCLK frequency implied by the sample rate and ratio, `None` on overflow.
  pub const fn mclk_hz(&self) -> Option<u32> {
    self.sample_rate_hz.checked_mul(self.mclk_ratio)
  }

  const fn default() -> Self {
    Self::new(16_000, 768, InterfaceFormat::StandardI2s, BitWidth::Bits16, MicBias::V2_87, MicGain::Db30, false)
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_is_16k_with_768_ratio() {
    let config = Config::default();
    assert_eq!(config.sample_rate_hz, 16_000);
    assert_eq!(config.mclk_hz(), Some(12_288_000));
    assert!(!config.tdm);
  }

  #[test]
  fn builders_replace_single_fields() {
    let config = Config::default().with_sample_rate(48_000).with_mclk_ratio(256).with_tdm(true);
    assert_eq!(config.mclk_hz(), Some(12_288_000));
    assert!(config.tdm);
    assert_eq!(config.format, InterfaceFormat::StandardI2s);
  }

  #[test]
  fn mclk_overflow_is_none() {
    assert_eq!(Config::default().with_sample_rate(u32::MAX).mclk_hz(), None);
  }
}
