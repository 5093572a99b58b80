use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Batch, Error, Es7210, Reg};

impl<I, E> Es7210<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read one register.
  pub fn read_register(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut buf = [0u8; 1];
    self.i2c.write_read(self.address, &[reg.into()], &mut buf).map_err(Error::I2c)?;
    Ok(buf[0])
  }

  /// Write one register, bypassing the bring-up state machine.
  pub fn write_register(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.i2c.write(self.address, &[reg.into(), value]).map_err(Error::I2c)
  }

  /// Write a batch in order, stopping at the first failure.
  pub(crate) fn write_batch(&mut self, batch: Batch) -> Result<(), Error<E>> {
    for write in batch {
      self.write_register(write.reg, write.value)?;
    }
    Ok(())
  }
}
