//! Pin and baud configuration for the BME63M001 TDS sensor board.
//!
//! Every constant is re-exported here, so `use tds_sensor_config::*;` is the
//! single place firmware pulls its wiring from. The ATmega4809 pin aliases
//! are part of the default `atmega4809` feature.
#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod diagnostics;
pub mod drivers;
pub mod serial;
pub mod table;

pub use config::*;

#[cfg(feature = "atmega4809")]
pub use board::atmega4809::*;

pub use board::{Board, PIN_LIMIT};
pub use diagnostics::{check_config, validate, ConfigError};
pub use table::{Category, NamedConstant, TABLE};
