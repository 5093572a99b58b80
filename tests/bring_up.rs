use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use es7210::{coefficients, BitWidth, Config, Error, Es7210, InterfaceFormat, MicBias, MicGain, Sequence, State, I2C_ADDR};

fn expect_writes(config: Config) -> Vec<I2cTransaction> {
  Sequence::new(config)
    .unwrap()
    .iter()
    .map(|(_, w)| I2cTransaction::write(I2C_ADDR, vec![w.reg.into(), w.value]))
    .collect()
}

#[test]
fn bring_up_48k_tdm_24_bit() {
  let config = Config::default()
    .with_sample_rate(48_000)
    .with_mclk_ratio(256)
    .with_format(InterfaceFormat::LeftJustified)
    .with_bit_width(BitWidth::Bits24)
    .with_mic_bias(MicBias::V2_66)
    .with_mic_gain(MicGain::Db24)
    .with_tdm(true);

  // Spot check the derived bytes against the datasheet encodings.
  let plan: Vec<(u8, u8)> =
    Sequence::new(config).unwrap().iter().map(|(_, w)| (w.reg.into(), w.value)).collect();
  assert_eq!(plan.len(), 30);
  assert_eq!(plan[8], (0x11, 0x02));
  assert_eq!(plan[9], (0x12, 0x02));
  assert_eq!(plan[11], (0x41, 0x50));
  assert_eq!(plan[13], (0x43, 0x18));
  assert_eq!(plan[22], (0x02, 0xC1));

  let mut expectations = expect_writes(config);
  expectations.extend([0x1E, 0x1D, 0x1C, 0x1B].map(|reg| I2cTransaction::write(I2C_ADDR, vec![reg, 0xC3])));

  let mut codec = Es7210::new(I2cMock::new(&expectations));
  codec.initialize(config).unwrap();
  codec.set_volume(2).unwrap();
  assert_eq!(codec.state(), State::Enabled);

  codec.release().done();
}

#[test]
fn every_clock_row_and_format_reaches_enabled() {
  let formats = [InterfaceFormat::StandardI2s, InterfaceFormat::LeftJustified, InterfaceFormat::DspA, InterfaceFormat::DspB];
  let widths = [BitWidth::Bits16, BitWidth::Bits18, BitWidth::Bits20, BitWidth::Bits24, BitWidth::Bits32];

  for row in coefficients() {
    let base = Config::default().with_sample_rate(row.lrck_hz).with_mclk_ratio(row.mclk_hz / row.lrck_hz);
    for format in formats {
      for bit_width in widths {
        let config = base.with_format(format).with_bit_width(bit_width);
        let plan: Vec<(u8, u8)> =
          Sequence::new(config).unwrap().iter().map(|(_, w)| (w.reg.into(), w.value)).collect();
        assert_eq!(plan[8], (0x11, bit_width.bits() | format.pattern()));
        assert_eq!(plan[21], (0x07, row.osr));
        assert_eq!(plan[22], (0x02, row.main_clk()));
        assert_eq!(plan[23], (0x04, row.lrck_h));
        assert_eq!(plan[24], (0x05, row.lrck_l));

        let mut codec = Es7210::new(I2cMock::new(&expect_writes(config)));
        codec.initialize(config).unwrap();
        assert_eq!(codec.state(), State::Enabled, "{} Hz from {} Hz", row.lrck_hz, row.mclk_hz);

        codec.release().done();
      }
    }
  }
}

#[test]
fn bus_error_stops_sequence() {
  let mut expectations: Vec<_> = expect_writes(Config::default()).into_iter().take(11).collect();
  expectations.push(I2cTransaction::write(I2C_ADDR, vec![0x41, 0x70]).with_error(ErrorKind::Other));

  let mut codec = Es7210::new(I2cMock::new(&expectations));
  assert_eq!(codec.initialize(Config::default()), Err(Error::I2c(ErrorKind::Other)));
  assert_eq!(codec.state(), State::Failed);
  assert_eq!(codec.progress(), State::AnalogPowerConfigured);

  codec.release().done();
}

#[test]
fn unsupported_ratio_is_silent_on_the_bus() {
  let expectations: [I2cTransaction; 0] = [];
  let mut codec = Es7210::new(I2cMock::new(&expectations));
  let err = codec.initialize(Config::default().with_sample_rate(48_000).with_mclk_ratio(384)).unwrap_err();
  assert_eq!(err, Error::UnsupportedClockRatio { sample_rate_hz: 48_000, mclk_ratio: 384 });

  codec.release().done();
}

#[test]
fn raw_tooling_values_fail_fast() {
  let width: Result<BitWidth, Error<ErrorKind>> = BitWidth::try_from(12).map_err(Error::from);
  assert_eq!(width, Err(Error::InvalidEnumValue(12)));
  assert_eq!(MicGain::try_from(10), Ok(MicGain::Db30));
}
