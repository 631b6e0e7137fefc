//! Converts Gregorian calendar dates into Ethiopian calendar dates.
//!
//! The conversion follows the Julian alignment for dates before the October
//! 1582 calendar reform and the Gregorian alignment afterwards.

pub mod converter;
pub mod date;
pub mod error;
pub mod input;

pub use converter::{convert, gregorian_to_ethiopian};
pub use date::{EthiopianDate, EthiopianMonth, GregorianDate};
pub use error::{ConversionError, PromptError};
