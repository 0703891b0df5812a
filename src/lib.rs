//! Driver for the Vishay VCNL4200 long distance proximity and ambient light
//! sensor, <https://www.vishay.com/docs/84430/vcnl4200.pdf>.

#![no_std]

use embedded_hal::i2c::I2c;

pub mod i2c;
pub mod types;

use i2c::Vcnl4200I2c;
use types::{AlsConf, PsConf1, PsConf2, PsConf3};

/// Default 7-bit bus address of the VCNL4200.
pub const DEFAULT_ADDRESS: u8 = 0x51;

/// Value the ID register reads back as.
pub const DEVICE_ID: u16 = 0x1058;

// VCNL4200 register addresses
mod regs {
    // Configuration
    pub const ALS_CONF: u8 = 0x00;
    pub const PS_CONF_1_2: u8 = 0x03;
    pub const PS_CONF_3: u8 = 0x04;

    // Output data
    pub const PS_DATA: u8 = 0x08;
    pub const ALS_DATA: u8 = 0x09;

    // Identification
    pub const ID: u8 = 0x0E;
}

/// VCNL4200 driver
pub struct Vcnl4200<I> {
    bus: I,
}

impl<I2C: I2c> Vcnl4200<Vcnl4200I2c<I2C>> {
    /// Creates a new VCNL4200 driver using I2C and writes the default
    /// configuration to the enabled sensor blocks.
    ///
    /// Make sure `i2c` is configured for standard mode (100 kHz) or fast
    /// mode (400 kHz); the chip supports nothing faster. The default
    /// address is [`DEFAULT_ADDRESS`].
    ///
    /// The proximity defaults select high definition output and the fastest
    /// IRED duty, which buys accuracy at the cost of power. Use
    /// [`configure_proximity_sensor`](Self::configure_proximity_sensor) and
    /// [`configure_ambient_light_sensor`](Self::configure_ambient_light_sensor)
    /// for anything else.
    pub fn init_i2c(
        i2c: I2C,
        address: u8,
        enable_ps: bool,
        enable_als: bool,
    ) -> Result<Self, I2C::Error> {
        Self::new(Vcnl4200I2c::new(i2c, address), enable_ps, enable_als)
    }
}

impl<I: Interface> Vcnl4200<I> {
    /// Creates a driver over an already-built bus interface and writes the
    /// default configuration to the enabled sensor blocks.
    pub fn new(bus: I, enable_ps: bool, enable_als: bool) -> Result<Self, I::Error> {
        let mut this = Self { bus };
        if enable_ps {
            this.configure_proximity_sensor(
                PsConf1::DEFAULT.raw_value(),
                PsConf2::DEFAULT.raw_value(),
                PsConf3::DEFAULT.raw_value(),
            )?;
        }
        if enable_als {
            this.configure_ambient_light_sensor(AlsConf::DEFAULT.raw_value())?;
        }
        Ok(this)
    }

    /// Reads the proximity output. Bigger means closer; the scale depends on
    /// the configured integration time and duty.
    pub fn get_distance(&mut self) -> Result<u16, I::Error> {
        self.read_register(regs::PS_DATA)
    }

    /// Reads the ambient light level, 0..=65535.
    pub fn get_ambient_light(&mut self) -> Result<u16, I::Error> {
        self.read_register(regs::ALS_DATA)
    }

    /// Reads the ID register. A present part answers [`DEVICE_ID`].
    pub fn device_id(&mut self) -> Result<u16, I::Error> {
        self.read_register(regs::ID)
    }

    /// Writes `conf1`/`conf2` to PS_CONF1/PS_CONF2, then `conf3` to
    /// PS_CONF3. See [`types::PsConf1`], [`types::PsConf2`] and
    /// [`types::PsConf3`] for building the bytes.
    ///
    /// These are two bus transactions; if the second fails the first has
    /// already taken effect. The chip imposes no ordering requirement
    /// across the two registers.
    pub fn configure_proximity_sensor(
        &mut self,
        conf1: u8,
        conf2: u8,
        conf3: u8,
    ) -> Result<(), I::Error> {
        self.write_register(regs::PS_CONF_1_2, conf1, conf2)?;
        self.write_register(regs::PS_CONF_3, conf3, 0x00)
    }

    /// Writes `conf` to ALS_CONF. See [`types::AlsConf`] for building the
    /// byte.
    pub fn configure_ambient_light_sensor(&mut self, conf: u8) -> Result<(), I::Error> {
        self.write_register(regs::ALS_CONF, conf, 0x00)
    }

    /// Gives back the bus interface.
    pub fn release(self) -> I {
        self.bus
    }

    fn read_register(&mut self, register: u8) -> Result<u16, I::Error> {
        let mut data = [0; 2];
        self.bus.write_read(register, &mut data)?;
        Ok(u16::from_le_bytes(data))
    }

    fn write_register(&mut self, register: u8, low: u8, high: u8) -> Result<(), I::Error> {
        self.bus.write(&[register, low, high])
    }
}

/// The bus transport the driver talks through. Registers are 16 bits wide,
/// low byte first.
pub trait Interface {
    type Error;
    /// Blocking full-buffer write.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
    /// Blocking combined write-then-read of `data.len()` bytes starting at
    /// `register`.
    fn write_read(&mut self, register: u8, data: &mut [u8]) -> Result<(), Self::Error>;
}
