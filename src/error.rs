use thiserror::Error;

/// Errors returned when a Gregorian date cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// One of the date components was zero or not an integer.
    #[error("Malformed input can't be converted.")]
    InvalidInput,
}

/// Errors from reading a date interactively.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        insta::assert_snapshot!(ConversionError::InvalidInput, @"Malformed input can't be converted.");

        let err = PromptError::from(ConversionError::InvalidInput);
        insta::assert_snapshot!(err, @"Malformed input can't be converted.");

        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err = PromptError::from(io);
        insta::assert_snapshot!(err, @"failed to read input: stdin closed");
    }
}
