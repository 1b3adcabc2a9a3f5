//! Configuration constants for the TDS sensor board

// Pin definitions for BME63M001

/// TDS sensor receive pin
pub const TDS_RX_PIN: u8 = 6;

/// TDS sensor transmit pin
pub const TDS_TX_PIN: u8 = 7;

// Pin definitions for the software serial debug link

/// Software serial receive pin
pub const SERIAL_RX_PIN: u8 = 10;

/// Software serial transmit pin
pub const SERIAL_TX_PIN: u8 = 11;

// Baud rates

/// Hardware UART baud rate
pub const SERIAL_BAUD: u32 = 9600;

/// Software serial baud rate
pub const SOFTWARE_SERIAL_BAUD: u32 = 4800;
