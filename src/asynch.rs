use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::volume::volume_value;
use crate::{Batch, Config, Error, Reg, Sequence, State, I2C_ADDR};

/// Async driver for the ES7210.
///
/// Runs the same bring-up [`Sequence`] as [`crate::Es7210`], awaiting each
/// register write before issuing the next one.
pub struct Es7210Async<I> {
  i2c: I,
  address: u8,
  state: State,
  progress: State,
}

impl<I, E> Es7210Async<I>
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

  pub fn release(self) -> I {
    self.i2c
  }

  /// Run the complete bring-up for `config`. See [`crate::Es7210::initialize`].
  pub async fn initialize(&mut self, config: Config) -> Result<(), Error<E>> {
    self.state = State::Uninitialized;
    self.progress = State::Uninitialized;

    let result = match Sequence::new(config) {
      Ok(sequence) => self.run(&sequence).await,
      Err(unsupported) => Err(unsupported.into()),
    };
    if result.is_err() {
      self.state = State::Failed;
    }
    result
  }

  /// Bring-up followed by 0 dB digital volume on every channel.
  pub async fn setup(&mut self, config: Config) -> Result<(), Error<E>> {
    self.initialize(config).await?;
    self.set_volume(0).await
  }

  /// Set the digital volume of all four channels. See [`crate::Es7210::set_volume`].
  pub async fn set_volume(&mut self, volume_db: i8) -> Result<(), Error<E>> {
    let value = volume_value(self.state, volume_db)?;
    for reg in Reg::MAX_GAIN {
      if let Err(e) = self.write_register(reg, value).await {
        self.state = State::Failed;
        return Err(e);
      }
    }
    Ok(())
  }

  pub async fn read_register(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut buf = [0u8; 1];
    self.i2c.write_read(self.address, &[reg.into()], &mut buf).await.map_err(Error::I2c)?;
    Ok(buf[0])
  }

  pub async fn write_register(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.i2c.write(self.address, &[reg.into(), value]).await.map_err(Error::I2c)
  }

  async fn run(&mut self, sequence: &Sequence) -> Result<(), Error<E>> {
    sequence.log();

    while let Some(next) = self.state.next() {
      trace!("es7210: -> {}", next);
      if let Err(e) = self.write_batch(sequence.writes(next)).await {
        warn!("es7210: bring-up aborted before {}", next);
        return Err(e);
      }
      self.state = next;
      self.progress = next;
    }

    debug!("es7210: enabled");
    Ok(())
  }

  async fn write_batch(&mut self, batch: Batch) -> Result<(), Error<E>> {
    for write in batch {
      self.write_register(write.reg, write.value).await?;
    }
    Ok(())
  }
}
