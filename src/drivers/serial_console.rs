use embedded_hal::serial::Write;
use ufmt::{uWrite, uwrite};

use crate::diagnostics::ConfigError;
use crate::table::NamedConstant;

/// Debug console on top of any blocking-capable serial transmitter.
pub struct SerialConsole<S> {
    serial: S,
}

impl<S: Write<u8>> SerialConsole<S> {
    pub fn new(serial: S) -> Self {
        Self { serial }
    }

    /// Give the underlying serial port back
    pub fn release(self) -> S {
        self.serial
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), S::Error> {
        nb::block!(self.serial.write(byte))
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), S::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    pub fn flush(&mut self) -> Result<(), S::Error> {
        nb::block!(self.serial.flush())
    }

    // Debug helper - print hex value
    pub fn write_hex(&mut self, val: u8) -> Result<(), S::Error> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.write_byte(HEX_CHARS[(val >> 4) as usize])?;
        self.write_byte(HEX_CHARS[(val & 0xF) as usize])
    }

    pub fn debug(&mut self, msg: &str, val: u8) -> Result<(), S::Error> {
        self.write_str("[DBG] ")?;
        self.write_str(msg)?;
        self.write_str(": 0x")?;
        self.write_hex(val)?;
        self.write_str("\r\n")
    }

    /// One `[CFG] NAME = value (category)` line per entry
    pub fn dump_table(&mut self, table: &[NamedConstant]) -> Result<(), S::Error> {
        for entry in table {
            uwrite!(
                self,
                "[CFG] {} = {} ({})\r\n",
                entry.name,
                entry.value,
                entry.category
            )?;
        }
        Ok(())
    }

    pub fn report(&mut self, result: &Result<(), ConfigError>) -> Result<(), S::Error> {
        match result {
            Ok(()) => self.write_line("[CFG] ok"),
            Err(e) => uwrite!(self, "[ERR] {}\r\n", e),
        }
    }
}

impl<S: Write<u8>> uWrite for SerialConsole<S> {
    type Error = S::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}
