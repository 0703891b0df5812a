use embedded_hal::i2c::I2c;

use crate::Interface;

/// VCNL4200 low level I2C driver
pub struct Vcnl4200I2c<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Vcnl4200I2c<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Gives back the underlying I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Interface for Vcnl4200I2c<I2C> {
    type Error = I2C::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), I2C::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("Vcnl4200I2c::write(data: {=[u8]})", data);
        self.i2c.write(self.address, data)
    }

    fn write_read(&mut self, register: u8, data: &mut [u8]) -> Result<(), I2C::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Vcnl4200I2c::write_read(register: 0x{=u8:X}, len: {=usize})",
            register,
            data.len()
        );
        self.i2c.write_read(self.address, &[register], data)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("read result: {=[u8]}", data);
        Ok(())
    }
}
