//! Serial link pin pairs and baud helpers

use crate::config::{
    SERIAL_BAUD, SERIAL_RX_PIN, SERIAL_TX_PIN, SOFTWARE_SERIAL_BAUD, TDS_RX_PIN, TDS_TX_PIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialPins {
    pub rx: u8,
    pub tx: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialLink {
    pub pins: SerialPins,
    pub baud: u32,
}

impl SerialLink {
    pub const fn bit_time_us(&self) -> u32 {
        bit_time_us(self.baud)
    }
}

/// BME63M001 TDS sensor
pub const TDS_SENSOR_PINS: SerialPins = SerialPins {
    rx: TDS_RX_PIN,
    tx: TDS_TX_PIN,
};

pub const SOFTWARE_SERIAL_PINS: SerialPins = SerialPins {
    rx: SERIAL_RX_PIN,
    tx: SERIAL_TX_PIN,
};

/// Bit-banged debug link
pub const SOFTWARE_SERIAL_LINK: SerialLink = SerialLink {
    pins: SOFTWARE_SERIAL_PINS,
    baud: SOFTWARE_SERIAL_BAUD,
};

/// Rates offered by the host serial monitor
pub const STANDARD_BAUD_RATES: [u32; 17] = [
    300, 600, 750, 1200, 2400, 4800, 9600, 19200, 31250, 38400, 57600, 74880, 115200, 230400,
    250000, 460800, 500000,
];

pub const fn is_standard_baud(baud: u32) -> bool {
    let mut i = 0;
    while i < STANDARD_BAUD_RATES.len() {
        if STANDARD_BAUD_RATES[i] == baud {
            return true;
        }
        i += 1;
    }
    false
}

/// Bit period in microseconds, rounded to nearest. Zero baud yields zero.
pub const fn bit_time_us(baud: u32) -> u32 {
    if baud == 0 {
        return 0;
    }
    (1_000_000 + baud / 2) / baud
}
