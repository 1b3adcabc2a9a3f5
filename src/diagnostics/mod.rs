//! Configuration checks and error reporting
//!
//! `validate` runs in const context: the guard at the bottom of this module
//! evaluates it over the compiled-in table so that a conflicting pin edit
//! stops the build instead of reaching the board.

use core::fmt;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use crate::board::{Board, PIN_LIMIT};
use crate::serial::is_standard_baud;
use crate::table::{Category, NamedConstant, TABLE};

/// LED on-time of a single blink
pub const BLINK_ON_MS: u16 = 200;
/// LED off-time between blinks
pub const BLINK_OFF_MS: u16 = 200;
/// Pause after a full code
pub const BLINK_PAUSE_MS: u16 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Same name defined twice
    DuplicateName { name: &'static str },
    /// Two distinct roles on one physical pin
    PinConflict {
        first: &'static str,
        second: &'static str,
        pin: u32,
    },
    PinOutOfRange { name: &'static str, pin: u32 },
    ZeroBaud { name: &'static str },
    NonStandardBaud { name: &'static str, baud: u32 },
    /// Analog alias not at `digital_pins + channel`
    AnalogNotContiguous { channel: u8, pin: u8 },
}

impl ConfigError {
    /// Number of blinks used to signal this error on the status LED
    pub const fn code(&self) -> u8 {
        match self {
            ConfigError::DuplicateName { .. } => 1,
            ConfigError::PinConflict { .. } => 2,
            ConfigError::PinOutOfRange { .. } => 3,
            ConfigError::ZeroBaud { .. } => 4,
            ConfigError::NonStandardBaud { .. } => 5,
            ConfigError::AnalogNotContiguous { .. } => 6,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::DuplicateName { name } => write!(f, "duplicate name {}", name),
            ConfigError::PinConflict { first, second, pin } => {
                write!(f, "pin {} used by both {} and {}", pin, first, second)
            }
            ConfigError::PinOutOfRange { name, pin } => {
                write!(f, "{} = {} is not a valid pin", name, pin)
            }
            ConfigError::ZeroBaud { name } => write!(f, "{} is zero", name),
            ConfigError::NonStandardBaud { name, baud } => {
                write!(f, "{} = {} is not a standard baud rate", name, baud)
            }
            ConfigError::AnalogNotContiguous { channel, pin } => {
                write!(f, "A{} mapped to pin {}", channel, pin)
            }
        }
    }
}

impl uDisplay for ConfigError {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match *self {
            ConfigError::DuplicateName { name } => uwrite!(f, "duplicate name {}", name),
            ConfigError::PinConflict { first, second, pin } => {
                uwrite!(f, "pin {} used by both {} and {}", pin, first, second)
            }
            ConfigError::PinOutOfRange { name, pin } => {
                uwrite!(f, "{} = {} is not a valid pin", name, pin)
            }
            ConfigError::ZeroBaud { name } => uwrite!(f, "{} is zero", name),
            ConfigError::NonStandardBaud { name, baud } => {
                uwrite!(f, "{} = {} is not a standard baud rate", name, baud)
            }
            ConfigError::AnalogNotContiguous { channel, pin } => {
                uwrite!(f, "A{} mapped to pin {}", channel, pin)
            }
        }
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether two pin categories may share a physical pin
const fn may_share(a: Category, b: Category) -> bool {
    if a.is_generic_alias() || b.is_generic_alias() {
        return true;
    }
    !a.is_exclusive_role() && !b.is_exclusive_role()
}

const fn check_entry(entry: &NamedConstant, pin_limit: u32) -> Result<(), ConfigError> {
    if entry.category.is_pin() {
        if entry.value >= pin_limit {
            return Err(ConfigError::PinOutOfRange {
                name: entry.name,
                pin: entry.value,
            });
        }
        return Ok(());
    }
    if entry.value == 0 {
        return Err(ConfigError::ZeroBaud { name: entry.name });
    }
    if !is_standard_baud(entry.value) {
        return Err(ConfigError::NonStandardBaud {
            name: entry.name,
            baud: entry.value,
        });
    }
    Ok(())
}

/// Check a constant table for duplicate names, role conflicts, pins outside
/// `0..pin_limit` and unusable baud rates. Reports the first problem found,
/// in table order.
pub const fn validate(table: &[NamedConstant], pin_limit: u32) -> Result<(), ConfigError> {
    let mut i = 0;
    while i < table.len() {
        let a = &table[i];
        if let Err(e) = check_entry(a, pin_limit) {
            return Err(e);
        }
        let mut j = i + 1;
        while j < table.len() {
            let b = &table[j];
            if str_eq(a.name, b.name) {
                return Err(ConfigError::DuplicateName { name: b.name });
            }
            if a.category.is_pin()
                && b.category.is_pin()
                && a.value == b.value
                && !may_share(a.category, b.category)
            {
                return Err(ConfigError::PinConflict {
                    first: a.name,
                    second: b.name,
                    pin: a.value,
                });
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

/// Check that `analog[n]` sits at `board.digital_pins + n` for every channel.
pub const fn check_analog_map(board: &Board, analog: &[u8]) -> Result<(), ConfigError> {
    let mut channel = 0;
    while channel < analog.len() {
        let pin = analog[channel];
        let ok = match board.analog_pin(channel as u8) {
            Some(expected) => expected == pin,
            None => false,
        };
        if !ok {
            return Err(ConfigError::AnalogNotContiguous {
                channel: channel as u8,
                pin,
            });
        }
        channel += 1;
    }
    Ok(())
}

#[cfg(feature = "atmega4809")]
const fn check_board() -> Result<(), ConfigError> {
    use crate::board::atmega4809::{ANALOG_PINS, ATMEGA4809};
    check_analog_map(&ATMEGA4809, &ANALOG_PINS)
}

#[cfg(not(feature = "atmega4809"))]
const fn check_board() -> Result<(), ConfigError> {
    Ok(())
}

/// Validate the compiled-in table against the compiled-in board.
pub const fn check_config() -> Result<(), ConfigError> {
    match validate(TABLE, PIN_LIMIT) {
        Ok(()) => check_board(),
        Err(e) => Err(e),
    }
}

const _: () = match check_config() {
    Ok(()) => (),
    Err(_) => panic!("pin configuration is inconsistent"),
};

/// Flash `error.code()` on the status LED, then pause.
pub fn blink_code<P, D>(led: &mut P, delay: &mut D, error: &ConfigError) -> Result<(), P::Error>
where
    P: OutputPin,
    D: DelayMs<u16>,
{
    for _ in 0..error.code() {
        led.set_high()?;
        delay.delay_ms(BLINK_ON_MS);
        led.set_low()?;
        delay.delay_ms(BLINK_OFF_MS);
    }
    delay.delay_ms(BLINK_PAUSE_MS);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

    const TEST_BOARD: Board = Board {
        name: "test",
        fqbn: "test:test:test",
        digital_pins: 14,
        analog_pins: 8,
    };

    #[test]
    fn compiled_table_is_valid() {
        assert_eq!(check_config(), Ok(()));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let table = [
            NamedConstant::new("TDS_RX_PIN", 6, Category::SensorPin),
            NamedConstant::new("TDS_RX_PIN", 8, Category::SensorPin),
        ];
        assert_eq!(
            validate(&table, 22),
            Err(ConfigError::DuplicateName { name: "TDS_RX_PIN" })
        );
    }

    #[test]
    fn sensor_and_debug_on_same_pin_conflict() {
        let table = [
            NamedConstant::new("TDS_RX_PIN", 10, Category::SensorPin),
            NamedConstant::new("SERIAL_RX_PIN", 10, Category::DebugSerialPin),
        ];
        assert_eq!(
            validate(&table, 22),
            Err(ConfigError::PinConflict {
                first: "TDS_RX_PIN",
                second: "SERIAL_RX_PIN",
                pin: 10,
            })
        );
    }

    #[test]
    fn two_sensor_roles_on_same_pin_conflict() {
        let table = [
            NamedConstant::new("TDS_RX_PIN", 6, Category::SensorPin),
            NamedConstant::new("TDS_TX_PIN", 6, Category::SensorPin),
        ];
        assert!(matches!(
            validate(&table, 22),
            Err(ConfigError::PinConflict { pin: 6, .. })
        ));
    }

    #[test]
    fn led_alias_on_sensor_pin_conflicts() {
        let table = [
            NamedConstant::new("TDS_TX_PIN", 19, Category::SensorPin),
            NamedConstant::new("LED_Drive", 19, Category::BuiltinLedAlias),
        ];
        assert_eq!(validate(&table, 22).map_err(|e| e.code()), Err(2));
    }

    #[test]
    fn intentional_aliases_are_allowed() {
        let table = [
            NamedConstant::new("PIN_13", 13, Category::MicrocontrollerPin),
            NamedConstant::new("LED_BUILTIN", 13, Category::BuiltinLedAlias),
            NamedConstant::new("LED_PIN", 13, Category::BuiltinLedAlias),
            NamedConstant::new("PIN_6", 6, Category::MicrocontrollerPin),
            NamedConstant::new("TDS_RX_PIN", 6, Category::SensorPin),
        ];
        assert_eq!(validate(&table, 22), Ok(()));
    }

    #[test]
    fn pin_out_of_range() {
        let table = [NamedConstant::new("A8", 22, Category::AnalogPin)];
        assert_eq!(
            validate(&table, 22),
            Err(ConfigError::PinOutOfRange { name: "A8", pin: 22 })
        );
    }

    #[test]
    fn baud_rates_are_checked() {
        let zero = [NamedConstant::new("SERIAL_BAUD", 0, Category::BaudRate)];
        assert_eq!(
            validate(&zero, 22),
            Err(ConfigError::ZeroBaud { name: "SERIAL_BAUD" })
        );

        let odd = [NamedConstant::new("SERIAL_BAUD", 9601, Category::BaudRate)];
        assert_eq!(
            validate(&odd, 22),
            Err(ConfigError::NonStandardBaud {
                name: "SERIAL_BAUD",
                baud: 9601,
            })
        );
    }

    #[test]
    fn baud_equal_to_pin_is_not_a_conflict() {
        let table = [
            NamedConstant::new("SERIAL_BAUD", 300, Category::BaudRate),
            NamedConstant::new("TDS_RX_PIN", 6, Category::SensorPin),
        ];
        assert_eq!(validate(&table, 22), Ok(()));
    }

    #[test]
    fn analog_map_must_be_contiguous() {
        assert_eq!(check_analog_map(&TEST_BOARD, &[14, 15, 16]), Ok(()));
        assert_eq!(
            check_analog_map(&TEST_BOARD, &[14, 16]),
            Err(ConfigError::AnalogNotContiguous { channel: 1, pin: 16 })
        );
        let too_many = [14, 15, 16, 17, 18, 19, 20, 21, 22];
        assert_eq!(
            check_analog_map(&TEST_BOARD, &too_many),
            Err(ConfigError::AnalogNotContiguous { channel: 8, pin: 22 })
        );
    }

    #[test]
    fn display_messages() {
        let e = ConfigError::PinConflict {
            first: "TDS_RX_PIN",
            second: "SERIAL_RX_PIN",
            pin: 10,
        };
        assert_eq!(e.to_string(), "pin 10 used by both TDS_RX_PIN and SERIAL_RX_PIN");
        assert_eq!(
            ConfigError::AnalogNotContiguous { channel: 5, pin: 20 }.to_string(),
            "A5 mapped to pin 20"
        );
    }

    #[test]
    fn blink_code_flashes_error_code() {
        let error = ConfigError::PinConflict {
            first: "a",
            second: "b",
            pin: 1,
        };
        let expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let mut led = PinMock::new(&expectations);
        let mut delay = MockNoop::new();

        blink_code(&mut led, &mut delay, &error).unwrap();
        led.done();
    }
}
