//! Board identity and pin numbering

#[cfg(feature = "atmega4809")]
pub mod atmega4809;

#[cfg(feature = "atmega4809")]
pub use atmega4809::ATMEGA4809;

/// A target board and the shape of its linear pin numbering.
///
/// Digital pins occupy `0..digital_pins`; analog inputs are mapped into the
/// same space directly after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub name: &'static str,
    /// Fully qualified board name as passed to `arduino-cli --fqbn`
    pub fqbn: &'static str,
    pub digital_pins: u8,
    pub analog_pins: u8,
}

impl Board {
    /// Total number of addressable pins
    pub const fn pin_count(&self) -> u8 {
        self.digital_pins + self.analog_pins
    }

    /// Linear pin number of analog input `channel`
    pub const fn analog_pin(&self, channel: u8) -> Option<u8> {
        if channel < self.analog_pins {
            Some(self.digital_pins + channel)
        } else {
            None
        }
    }

    pub const fn is_valid_pin(&self, pin: u8) -> bool {
        pin < self.pin_count()
    }

    pub const fn is_analog_pin(&self, pin: u8) -> bool {
        pin >= self.digital_pins && pin < self.pin_count()
    }
}

/// Exclusive upper bound for pin values in the configuration table
#[cfg(feature = "atmega4809")]
pub const PIN_LIMIT: u32 = ATMEGA4809.pin_count() as u32;

/// Exclusive upper bound for pin values in the configuration table
#[cfg(not(feature = "atmega4809"))]
pub const PIN_LIMIT: u32 = u8::MAX as u32 + 1;

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: Board = Board {
        name: "test",
        fqbn: "test:test:test",
        digital_pins: 4,
        analog_pins: 2,
    };

    #[test]
    fn analog_pins_follow_digital_pins() {
        assert_eq!(SMALL.analog_pin(0), Some(4));
        assert_eq!(SMALL.analog_pin(1), Some(5));
        assert_eq!(SMALL.analog_pin(2), None);
    }

    #[test]
    fn pin_ranges() {
        assert_eq!(SMALL.pin_count(), 6);
        assert!(SMALL.is_valid_pin(5));
        assert!(!SMALL.is_valid_pin(6));
        assert!(!SMALL.is_analog_pin(3));
        assert!(SMALL.is_analog_pin(4));
        assert!(!SMALL.is_analog_pin(6));
    }
}
