//! ATmega4809 pin definitions (MegaCoreX pinout)
#![allow(non_upper_case_globals)]

use super::Board;

pub const ATMEGA4809: Board = Board {
    name: "ATmega4809",
    fqbn: "MegaCoreX:megaavr:4809",
    digital_pins: 14,
    analog_pins: 8,
};

// Digital pins (INPUT or OUTPUT)
pub const PIN_0: u8 = 0;
pub const PIN_1: u8 = 1;
pub const PIN_2: u8 = 2;
pub const PIN_3: u8 = 3;
pub const PIN_4: u8 = 4;
pub const PIN_5: u8 = 5;
pub const PIN_6: u8 = 6;
pub const PIN_7: u8 = 7;
pub const PIN_8: u8 = 8;
pub const PIN_9: u8 = 9;
pub const PIN_10: u8 = 10;
pub const PIN_11: u8 = 11;
pub const PIN_12: u8 = 12;
/// Digital pin 13, wired to the built-in LED
pub const PIN_13: u8 = 13;

// Analog pins (analog INPUT, or digital INPUT/OUTPUT)
pub const A0: u8 = 14;
pub const A1: u8 = 15;
pub const A2: u8 = 16;
pub const A3: u8 = 17;
pub const A4: u8 = 18;
pub const A5: u8 = 19;
pub const A6: u8 = 20;
pub const A7: u8 = 21;

/// Built-in LED
pub const LED_BUILTIN: u8 = PIN_13;
pub const LED_PIN: u8 = LED_BUILTIN;
/// LED drive signal on A5
pub const LED_Drive: u8 = A5;

pub const DIGITAL_PINS: [u8; 14] = [
    PIN_0, PIN_1, PIN_2, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PIN_9, PIN_10, PIN_11, PIN_12,
    PIN_13,
];

pub const ANALOG_PINS: [u8; 8] = [A0, A1, A2, A3, A4, A5, A6, A7];
