//! Named constant table
//!
//! Every constant exported by the crate, tagged with the hardware role it
//! plays. The table is what validation and the debug dump walk over.

use core::fmt;
use ufmt::{uDisplay, uWrite, Formatter};

use crate::config::*;

#[cfg(feature = "atmega4809")]
use crate::board::atmega4809::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    SensorPin = 0,
    DebugSerialPin = 1,
    BaudRate = 2,
    MicrocontrollerPin = 3,
    AnalogPin = 4,
    BuiltinLedAlias = 5,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::SensorPin => "sensor pin",
            Category::DebugSerialPin => "debug serial pin",
            Category::BaudRate => "baud rate",
            Category::MicrocontrollerPin => "digital pin",
            Category::AnalogPin => "analog pin",
            Category::BuiltinLedAlias => "led alias",
        }
    }

    pub const fn is_pin(self) -> bool {
        !matches!(self, Category::BaudRate)
    }

    /// Generic board aliases may share a value with anything.
    pub const fn is_generic_alias(self) -> bool {
        matches!(self, Category::MicrocontrollerPin | Category::AnalogPin)
    }

    /// Roles that own their pin outright.
    pub const fn is_exclusive_role(self) -> bool {
        matches!(self, Category::SensorPin | Category::DebugSerialPin)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl uDisplay for Category {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedConstant {
    pub name: &'static str,
    pub value: u32,
    pub category: Category,
}

impl NamedConstant {
    pub const fn new(name: &'static str, value: u32, category: Category) -> Self {
        Self {
            name,
            value,
            category,
        }
    }
}

macro_rules! entry {
    ($name:ident, $category:ident) => {
        NamedConstant::new(stringify!($name), $name as u32, Category::$category)
    };
}

const BASE: &[NamedConstant] = &[
    entry!(TDS_RX_PIN, SensorPin),
    entry!(TDS_TX_PIN, SensorPin),
    entry!(SERIAL_RX_PIN, DebugSerialPin),
    entry!(SERIAL_TX_PIN, DebugSerialPin),
    entry!(SERIAL_BAUD, BaudRate),
    entry!(SOFTWARE_SERIAL_BAUD, BaudRate),
];

#[cfg(feature = "atmega4809")]
const EXTENSION: &[NamedConstant] = &[
    entry!(PIN_0, MicrocontrollerPin),
    entry!(PIN_1, MicrocontrollerPin),
    entry!(PIN_2, MicrocontrollerPin),
    entry!(PIN_3, MicrocontrollerPin),
    entry!(PIN_4, MicrocontrollerPin),
    entry!(PIN_5, MicrocontrollerPin),
    entry!(PIN_6, MicrocontrollerPin),
    entry!(PIN_7, MicrocontrollerPin),
    entry!(PIN_8, MicrocontrollerPin),
    entry!(PIN_9, MicrocontrollerPin),
    entry!(PIN_10, MicrocontrollerPin),
    entry!(PIN_11, MicrocontrollerPin),
    entry!(PIN_12, MicrocontrollerPin),
    entry!(PIN_13, MicrocontrollerPin),
    entry!(A0, AnalogPin),
    entry!(A1, AnalogPin),
    entry!(A2, AnalogPin),
    entry!(A3, AnalogPin),
    entry!(A4, AnalogPin),
    entry!(A5, AnalogPin),
    entry!(A6, AnalogPin),
    entry!(A7, AnalogPin),
    entry!(LED_BUILTIN, BuiltinLedAlias),
    entry!(LED_PIN, BuiltinLedAlias),
    entry!(LED_Drive, BuiltinLedAlias),
];

#[cfg(not(feature = "atmega4809"))]
const EXTENSION: &[NamedConstant] = &[];

const PLACEHOLDER: NamedConstant = NamedConstant::new("", 0, Category::BaudRate);

const fn concat<const N: usize>(a: &[NamedConstant], b: &[NamedConstant]) -> [NamedConstant; N] {
    let mut out = [PLACEHOLDER; N];
    let mut i = 0;
    while i < a.len() {
        out[i] = a[i];
        i += 1;
    }
    let mut j = 0;
    while j < b.len() {
        out[a.len() + j] = b[j];
        j += 1;
    }
    out
}

const ENTRIES: [NamedConstant; BASE.len() + EXTENSION.len()] = concat(BASE, EXTENSION);

/// All configuration constants
pub const TABLE: &[NamedConstant] = &ENTRIES;

pub fn lookup(name: &str) -> Option<&'static NamedConstant> {
    TABLE.iter().find(|c| c.name == name)
}

pub fn value_of(name: &str) -> Option<u32> {
    lookup(name).map(|c| c.value)
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static NamedConstant> {
    TABLE.iter().filter(move |c| c.category == category)
}

/// Every name bound to physical pin `pin`
pub fn names_for_pin(pin: u8) -> impl Iterator<Item = &'static str> {
    TABLE
        .iter()
        .filter(move |c| c.category.is_pin() && c.value == pin as u32)
        .map(|c| c.name)
}
