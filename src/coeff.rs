/// Divider settings that produce a given LRCK from a given MCLK.
///
/// Rows come from the Everest application notes. The ADC runs at
/// `MCLK * (doubler + 1) / adc_div`, oversampled by `osr`, and LRCK is
/// MCLK divided by the 12-bit `lrck_h:lrck_l` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockCoefficient {
  pub mclk_hz: u32,
  pub lrck_hz: u32,
  pub adc_div: u8,
  pub dll_bypass: bool,
  pub doubler: bool,
  pub osr: u8,
  pub lrck_h: u8,
  pub lrck_l: u8,
}

impl ClockCoefficient {
  #[allow(clippy::too_many_arguments)]
  const fn new(
    mclk_hz: u32,
    lrck_hz: u32,
    adc_div: u8,
    dll_bypass: bool,
    doubler: bool,
    osr: u8,
    lrck_h: u8,
    lrck_l: u8,
  ) -> Self {
    Self { mclk_hz, lrck_hz, adc_div, dll_bypass, doubler, osr, lrck_h, lrck_l }
  }

  /// `MAIN_CLK` register value: `adc_div | doubler << 6 | dll_bypass << 7`.
  pub const fn main_clk(&self) -> u8 {
    self.adc_div | (self.doubler as u8) << 6 | (self.dll_bypass as u8) << 7
  }

  /// LRCK divider as programmed into `LRCK_DIVH:LRCK_DIVL`.
  pub const fn lrck_divider(&self) -> u16 {
    (self.lrck_h as u16) << 8 | self.lrck_l as u16
  }
}

#[rustfmt::skip]
static COEFFICIENTS: [ClockCoefficient; 25] = [
  //                    mclk        lrck    div   dll    doubler osr   lrck_h lrck_l
  // 8k
  ClockCoefficient::new(12_288_000, 8_000,  0x03, true,  false, 0x20, 0x06, 0x00),
  ClockCoefficient::new(16_384_000, 8_000,  0x04, true,  false, 0x20, 0x08, 0x00),
  ClockCoefficient::new(19_200_000, 8_000,  0x1E, false, true,  0x28, 0x09, 0x60),
  ClockCoefficient::new(4_096_000,  8_000,  0x01, true,  false, 0x20, 0x02, 0x00),
  // 11.025k
  ClockCoefficient::new(11_289_600, 11_025, 0x01, true,  false, 0x20, 0x04, 0x00),
  // 12k
  ClockCoefficient::new(12_288_000, 12_000, 0x02, true,  false, 0x20, 0x04, 0x00),
  ClockCoefficient::new(19_200_000, 12_000, 0x14, false, true,  0x28, 0x06, 0x40),
  // 16k
  ClockCoefficient::new(4_096_000,  16_000, 0x01, true,  true,  0x20, 0x01, 0x00),
  ClockCoefficient::new(19_200_000, 16_000, 0x0A, false, false, 0x1E, 0x04, 0xB0),
  ClockCoefficient::new(16_384_000, 16_000, 0x02, true,  false, 0x20, 0x04, 0x00),
  ClockCoefficient::new(12_288_000, 16_000, 0x03, true,  true,  0x20, 0x03, 0x00),
  // 22.05k
  ClockCoefficient::new(11_289_600, 22_050, 0x01, true,  false, 0x20, 0x02, 0x00),
  // 24k
  ClockCoefficient::new(12_288_000, 24_000, 0x01, true,  false, 0x20, 0x02, 0x00),
  ClockCoefficient::new(19_200_000, 24_000, 0x0A, false, true,  0x28, 0x03, 0x20),
  // 32k
  ClockCoefficient::new(12_288_000, 32_000, 0x03, false, false, 0x20, 0x01, 0x80),
  ClockCoefficient::new(16_384_000, 32_000, 0x01, true,  false, 0x20, 0x02, 0x00),
  ClockCoefficient::new(19_200_000, 32_000, 0x05, false, false, 0x1E, 0x02, 0x58),
  // 44.1k
  ClockCoefficient::new(11_289_600, 44_100, 0x01, true,  true,  0x20, 0x01, 0x00),
  // 48k
  ClockCoefficient::new(12_288_000, 48_000, 0x01, true,  true,  0x20, 0x01, 0x00),
  ClockCoefficient::new(19_200_000, 48_000, 0x05, false, true,  0x28, 0x01, 0x90),
  // 64k
  ClockCoefficient::new(16_384_000, 64_000, 0x01, true,  false, 0x20, 0x01, 0x00),
  ClockCoefficient::new(19_200_000, 64_000, 0x05, false, true,  0x1E, 0x01, 0x2C),
  // 88.2k
  ClockCoefficient::new(11_289_600, 88_200, 0x01, true,  true,  0x20, 0x00, 0x80),
  // 96k
  ClockCoefficient::new(12_288_000, 96_000, 0x01, true,  true,  0x20, 0x00, 0x80),
  ClockCoefficient::new(19_200_000, 96_000, 0x05, false, true,  0x28, 0x00, 0xC8),
];

/// Every supported (MCLK, LRCK) combination.
pub fn coefficients() -> &'static [ClockCoefficient] {
  &COEFFICIENTS
}

/// Look up the divider settings for an exact (MCLK, LRCK) pair.
///
/// Returns `None` when the pair is not in the table; there is no fallback to
/// a nearby rate.
pub fn resolve(mclk_hz: u32, lrck_hz: u32) -> Option<&'static ClockCoefficient> {
  COEFFICIENTS.iter().find(|c| c.mclk_hz == mclk_hz && c.lrck_hz == lrck_hz)
}
