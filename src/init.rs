use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::config::{interface1, interface2};
use crate::{coeff, ClockCoefficient, Config, Error, Es7210, Reg, UnsupportedClock};

/// Bring-up progress of the codec.
///
/// States only move forward, one register group per step. Any bus error
/// moves the driver to [`State::Failed`]; recovery is a fresh
/// [`Es7210::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
  Uninitialized,
  Reset,
  TimingConfigured,
  FiltersConfigured,
  FormatConfigured,
  AnalogPowerConfigured,
  BiasConfigured,
  GainConfigured,
  MicPowerConfigured,
  ClockConfigured,
  DllPoweredDown,
  MicAdcPowered,
  Enabled,
  Failed,
}

impl State {
  /// The state reached by the next transition, `None` once terminal.
  pub const fn next(self) -> Option<State> {
    match self {
      Self::Uninitialized => Some(Self::Reset),
      Self::Reset => Some(Self::TimingConfigured),
      Self::TimingConfigured => Some(Self::FiltersConfigured),
      Self::FiltersConfigured => Some(Self::FormatConfigured),
      Self::FormatConfigured => Some(Self::AnalogPowerConfigured),
      Self::AnalogPowerConfigured => Some(Self::BiasConfigured),
      Self::BiasConfigured => Some(Self::GainConfigured),
      Self::GainConfigured => Some(Self::MicPowerConfigured),
      Self::MicPowerConfigured => Some(Self::ClockConfigured),
      Self::ClockConfigured => Some(Self::DllPoweredDown),
      Self::DllPoweredDown => Some(Self::MicAdcPowered),
      Self::MicAdcPowered => Some(Self::Enabled),
      Self::Enabled | Self::Failed => None,
    }
  }

  pub const fn is_terminal(self) -> bool {
    matches!(self, Self::Enabled | Self::Failed)
  }
}

/// A single register assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegWrite {
  pub reg: Reg,
  pub value: u8,
}

impl RegWrite {
  pub const fn new(reg: Reg, value: u8) -> Self {
    Self { reg, value }
  }
}

const MAX_BATCH: usize = 4;

/// Rejects batches longer than `MAX_BATCH` when `Batch::of` is instantiated.
struct Fits<const N: usize>;

impl<const N: usize> Fits<N> {
  const OK: () = assert!(N <= MAX_BATCH, "batch holds at most MAX_BATCH writes");
}

/// The writes performed by one state transition, in bus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
  writes: [RegWrite; MAX_BATCH],
  len: usize,
}

impl Batch {
  const EMPTY: Self = Self { writes: [RegWrite::new(Reg::Reset, 0); MAX_BATCH], len: 0 };

  fn of<const N: usize>(writes: [RegWrite; N]) -> Self {
    let () = Fits::<N>::OK;

    let mut batch = Self::EMPTY;
    batch.writes[..N].copy_from_slice(&writes);
    batch.len = N;
    batch
  }

  fn same_value(regs: [Reg; MAX_BATCH], value: u8) -> Self {
    Self::of(regs.map(|reg| RegWrite::new(reg, value)))
  }

  pub fn as_slice(&self) -> &[RegWrite] {
    &self.writes[..self.len]
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl IntoIterator for Batch {
  type Item = RegWrite;
  type IntoIter = core::iter::Take<core::array::IntoIter<RegWrite, MAX_BATCH>>;

  fn into_iter(self) -> Self::IntoIter {
    self.writes.into_iter().take(self.len)
  }
}

/// A validated bring-up plan: the configuration plus its resolved clock.
///
/// Holding a `Sequence` proves the clock lookup succeeded, so every
/// transition has concrete register values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
  config: Config,
  clock: &'static ClockCoefficient,
}

impl Sequence {
  /// Resolve the clock settings for `config`.
  pub fn new(config: Config) -> Result<Self, UnsupportedClock> {
    let unsupported = UnsupportedClock { sample_rate_hz: config.sample_rate_hz, mclk_ratio: config.mclk_ratio };

    let Some(mclk_hz) = config.mclk_hz() else {
      warn!("es7210: {} Hz x {} overflows MCLK", config.sample_rate_hz, config.mclk_ratio);
      return Err(unsupported);
    };

    match coeff::resolve(mclk_hz, config.sample_rate_hz) {
      Some(clock) => Ok(Self { config, clock }),
      None => {
        warn!("es7210: unable to set {} Hz sample rate with {} Hz MCLK", config.sample_rate_hz, mclk_hz);
        Err(unsupported)
      }
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn clock(&self) -> &'static ClockCoefficient {
    self.clock
  }

  /// Register writes that move the chip into `target`.
  pub fn writes(&self, target: State) -> Batch {
    let config = &self.config;
    let clock = self.clock;

    match target {
      State::Uninitialized | State::Failed => Batch::EMPTY,
      // Full reset, then release it with the state machine held off.
      State::Reset => Batch::of([RegWrite::new(Reg::Reset, 0xFF), RegWrite::new(Reg::Reset, 0x32)]),
      State::TimingConfigured => {
        Batch::of([RegWrite::new(Reg::TimeControl0, 0x30), RegWrite::new(Reg::TimeControl1, 0x30)])
      }
      State::FiltersConfigured => Batch::of([
        RegWrite::new(Reg::Adc12Hpf1, 0x2A),
        RegWrite::new(Reg::Adc12Hpf2, 0x0A),
        RegWrite::new(Reg::Adc34Hpf1, 0x2A),
        RegWrite::new(Reg::Adc34Hpf2, 0x0A),
      ]),
      State::FormatConfigured => Batch::of([
        RegWrite::new(Reg::SdpInterface1, interface1(config.format, config.bit_width)),
        RegWrite::new(Reg::SdpInterface2, interface2(config.format, config.tdm)),
      ]),
      // Analog power on, VDDA 3.3V, VMID 5kΩ start
      State::AnalogPowerConfigured => Batch::of([RegWrite::new(Reg::Analog, 0xC3)]),
      State::BiasConfigured => Batch::of([
        RegWrite::new(Reg::Mic12Bias, config.mic_bias.into()),
        RegWrite::new(Reg::Mic34Bias, config.mic_bias.into()),
      ]),
      State::GainConfigured => Batch::same_value(Reg::MIC_GAIN, config.mic_gain.register()),
      State::MicPowerConfigured => Batch::same_value(Reg::MIC_LOW_POWER, 0x08),
      State::ClockConfigured => Batch::of([
        RegWrite::new(Reg::Osr, clock.osr),
        RegWrite::new(Reg::MainClk, clock.main_clk()),
        RegWrite::new(Reg::LrckDivH, clock.lrck_h),
        RegWrite::new(Reg::LrckDivL, clock.lrck_l),
      ]),
      State::DllPoweredDown => Batch::of([RegWrite::new(Reg::PowerDown, 0x04)]),
      // Bias, ADC and PGA on for all four channels
      State::MicAdcPowered => {
        Batch::of([RegWrite::new(Reg::Mic12PowerDown, 0x0F), RegWrite::new(Reg::Mic34PowerDown, 0x0F)])
      }
      State::Enabled => Batch::of([RegWrite::new(Reg::Reset, 0x71), RegWrite::new(Reg::Reset, 0x41)]),
    }
  }

  /// Every write of the bring-up paired with the state it completes.
  pub fn iter(&self) -> impl Iterator<Item = (State, RegWrite)> + '_ {
    core::iter::successors(State::Uninitialized.next(), |s| State::next(*s))
      .flat_map(move |state| self.writes(state).into_iter().map(move |w| (state, w)))
  }

  pub(crate) fn log(&self) {
    let config = &self.config;
    info!(
      "es7210: format: {}, bit width: {}, tdm mode {}",
      config.format.name(),
      config.bit_width.width(),
      if config.tdm { "enabled" } else { "disabled" }
    );
    info!("es7210: sample rate: {} Hz, mclk frequency: {} Hz", config.sample_rate_hz, self.clock.mclk_hz);
  }
}

impl<I, E> Es7210<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Run the complete bring-up for `config`.
  ///
  /// The clock settings are resolved first; an unsupported (rate, ratio) pair
  /// fails with [`Error::UnsupportedClockRatio`] before anything is written.
  /// On a bus error the remaining writes are skipped and the driver stays in
  /// [`State::Failed`].
  pub fn initialize(&mut self, config: Config) -> Result<(), Error<E>> {
    self.state = State::Uninitialized;
    self.progress = State::Uninitialized;

    let result = Sequence::new(config).map_err(Error::from).and_then(|sequence| self.run(&sequence));
    if result.is_err() {
      self.state = State::Failed;
    }
    result
  }

  /// Bring-up followed by 0 dB digital volume on every channel.
  pub fn setup(&mut self, config: Config) -> Result<(), Error<E>> {
    self.initialize(config)?;
    self.set_volume(0)
  }

  fn run(&mut self, sequence: &Sequence) -> Result<(), Error<E>> {
    sequence.log();

    while let Some(next) = self.state.next() {
      trace!("es7210: -> {}", next);
      self.write_batch(sequence.writes(next)).map_err(|e| {
        warn!("es7210: bring-up aborted before {}", next);
        e
      })?;
      self.state = next;
      self.progress = next;
    }

    debug!("es7210: enabled");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{BitWidth, InterfaceFormat};

  fn sequence(config: Config) -> Sequence {
    Sequence::new(config).expect("supported clock")
  }

  #[test]
  fn states_advance_linearly_to_enabled() {
    let mut state = State::Uninitialized;
    let mut steps = 0;
    while let Some(next) = state.next() {
      state = next;
      steps += 1;
    }
    assert_eq!(state, State::Enabled);
    assert_eq!(steps, 12);
    assert_eq!(State::Failed.next(), None);
  }

  #[test]
  fn default_plan_has_thirty_writes() {
    assert_eq!(sequence(Config::default()).iter().count(), 30);
  }

  #[test]
  fn format_batch_for_tdm() {
    let seq = sequence(Config::default().with_tdm(true));
    assert_eq!(
      seq.writes(State::FormatConfigured).as_slice(),
      &[RegWrite::new(Reg::SdpInterface1, 0x62), RegWrite::new(Reg::SdpInterface2, 0x02)]
    );

    let seq = sequence(Config::default().with_format(InterfaceFormat::DspA).with_bit_width(BitWidth::Bits24));
    assert_eq!(
      seq.writes(State::FormatConfigured).as_slice(),
      &[RegWrite::new(Reg::SdpInterface1, 0x01), RegWrite::new(Reg::SdpInterface2, 0x00)]
    );
  }

  #[test]
  fn clock_batch_uses_resolved_row() {
    let seq = sequence(Config::default().with_sample_rate(48_000).with_mclk_ratio(400));
    assert_eq!(
      seq.writes(State::ClockConfigured).as_slice(),
      &[
        RegWrite::new(Reg::Osr, 0x28),
        RegWrite::new(Reg::MainClk, 0x45),
        RegWrite::new(Reg::LrckDivH, 0x01),
        RegWrite::new(Reg::LrckDivL, 0x90),
      ]
    );
  }

  #[test]
  fn unsupported_clock_has_no_plan() {
    let err = Sequence::new(Config::default().with_mclk_ratio(100)).unwrap_err();
    assert_eq!(err, UnsupportedClock { sample_rate_hz: 16_000, mclk_ratio: 100 });

    let err = Sequence::new(Config::default().with_sample_rate(0)).unwrap_err();
    assert_eq!(Error::<()>::from(err), Error::UnsupportedClockRatio { sample_rate_hz: 0, mclk_ratio: 768 });
  }

  #[test]
  fn full_batch_keeps_every_write() {
    let writes = [
      RegWrite::new(Reg::Osr, 0x20),
      RegWrite::new(Reg::MainClk, 0xC3),
      RegWrite::new(Reg::LrckDivH, 0x03),
      RegWrite::new(Reg::LrckDivL, 0x00),
    ];
    let batch = Batch::of(writes);
    assert_eq!(batch.len(), MAX_BATCH);
    assert_eq!(batch.as_slice(), &writes);
    assert_eq!(batch.into_iter().count(), MAX_BATCH);
  }

  #[test]
  fn no_transition_exceeds_a_batch() {
    let seq = sequence(Config::default());
    let per_state: usize = core::iter::successors(Some(State::Uninitialized), |s| State::next(*s))
      .map(|state| seq.writes(state).len())
      .inspect(|len| assert!(*len <= MAX_BATCH))
      .sum();
    assert_eq!(per_state, seq.iter().count());
  }

  #[test]
  fn terminal_states_write_nothing() {
    let seq = sequence(Config::default());
    assert!(seq.writes(State::Uninitialized).is_empty());
    assert!(seq.writes(State::Failed).is_empty());
  }
}
