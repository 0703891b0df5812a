use arbitrary_int::*;
use bitbybit::bitfield;

/// ALS_CONF register. The default leaves the ambient light sensor powered
/// on with an 80 ms integration time.
#[bitfield(u8, default = 0x00)]
pub struct AlsConf {
    /// Integration time (80/160/320/640 ms)
    #[bits(6..=7, rw)]
    pub integration_time: u2,
    #[bit(5, rw)]
    pub interrupt_switch: bool,
    /// Interrupt persistence (1/2/4/8)
    #[bits(2..=3, rw)]
    pub persistence: u2,
    #[bit(1, rw)]
    pub interrupt_enable: bool,
    #[bit(0, rw)]
    pub shutdown: bool,
}

/// PS_CONF1 register. The default (0xCA) selects the fastest IRED duty
/// ratio and a 9T integration time, trading power for accuracy.
#[bitfield(u8, default = 0xCA)]
pub struct PsConf1 {
    /// IRED on/off duty ratio (1/160, 1/320, 1/640, 1/1280)
    #[bits(6..=7, rw)]
    pub duty: u2,
    /// Interrupt persistence (1/2/3/4)
    #[bits(4..=5, rw)]
    pub persistence: u2,
    /// Integration time (1T..9T)
    #[bits(1..=3, rw)]
    pub integration_time: u3,
    #[bit(0, rw)]
    pub shutdown: bool,
}

/// PS_CONF2 register. The default (0x08) enables 16-bit high definition
/// output.
#[bitfield(u8, default = 0x08)]
pub struct PsConf2 {
    /// 16-bit output instead of 12-bit
    #[bit(3, rw)]
    pub high_definition: bool,
    /// Interrupt trigger (disabled, closing, away, both)
    #[bits(0..=1, rw)]
    pub interrupt_mode: u2,
}

/// PS_CONF3 register.
#[bitfield(u8, default = 0x00)]
pub struct PsConf3 {
    /// Multi pulse numbers (1/2/4/8)
    #[bits(5..=6, rw)]
    pub multi_pulse: u2,
    #[bit(4, rw)]
    pub smart_persistence: bool,
    /// Active force mode, readings only happen on trigger
    #[bit(3, rw)]
    pub active_force: bool,
    /// One-shot trigger for active force mode, self-clearing
    #[bit(2, rw)]
    pub trigger: bool,
    /// Sunlight cancellation
    #[bit(0, rw)]
    pub sunlight_cancel: bool,
}

#[cfg(all(test, not(all(target_arch = "arm", target_os = "none"))))]
mod test {
    use super::*;

    #[test]
    fn defaults_match_datasheet_bytes() {
        assert_eq!(AlsConf::DEFAULT.raw_value(), 0x00);
        assert_eq!(PsConf1::DEFAULT.raw_value(), 0xCA);
        assert_eq!(PsConf2::DEFAULT.raw_value(), 0x08);
        assert_eq!(PsConf3::DEFAULT.raw_value(), 0x00);
    }

    #[test]
    fn ps_conf1_fields() {
        let conf = PsConf1::DEFAULT;
        assert_eq!(conf.duty(), u2::new(0b11));
        assert_eq!(conf.integration_time(), u3::new(0b101));
        assert!(!conf.shutdown());
        assert_eq!(conf.with_shutdown(true).raw_value(), 0xCB);
    }

    #[test]
    fn als_conf_fields() {
        let conf = AlsConf::DEFAULT
            .with_integration_time(u2::new(0b11))
            .with_shutdown(true);
        assert_eq!(conf.raw_value(), 0xC1);
    }
}
