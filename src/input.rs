use std::io::{BufRead, Write};

use tracing::debug;

use crate::date::GregorianDate;
use crate::error::{ConversionError, PromptError};

/// Parses one textual date component as an integer.
///
/// Surrounding whitespace is ignored. Fractional, textual and empty values are
/// rejected with [`ConversionError::InvalidInput`], as is anything outside the
/// `i32` range.
pub fn parse_component(label: &str, text: &str) -> Result<i32, ConversionError> {
    let text = text.trim();
    text.parse::<i32>().map_err(|e| {
        debug!(label, text, error = %e, "rejected date component");
        ConversionError::InvalidInput
    })
}

/// Interactively asks for a Gregorian date, one component per line.
pub fn prompt_date<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<GregorianDate, PromptError> {
    writeln!(writer, "Gregorian Date to Ethiopian Date Converter")?;
    writeln!(writer, "Enter Gregorian Date:")?;

    let year = prompt_component(reader, writer, "Year")?;
    let month = prompt_component(reader, writer, "Month")?;
    let day = prompt_component(reader, writer, "Date")?;

    Ok(GregorianDate::new(year, month, day))
}

fn prompt_component<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<i32, PromptError> {
    write!(writer, "{label}: ")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(parse_component(label, &line)?)
}
