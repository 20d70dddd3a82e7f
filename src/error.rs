use thiserror::Error;

/// Parse failure for a color string.
///
/// This is the only failure the color math can produce: every numeric
/// operation clamps out-of-range input instead of rejecting it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length {len} in {input:?} (expected 3 or 6 digits)")]
    InvalidLength { input: String, len: usize },
    #[error("invalid hex digits in {input:?}")]
    InvalidDigit { input: String },
    #[error("unsupported color value {input:?}")]
    Unsupported { input: String },
}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(feature = "node")]
impl From<ColorError> for napi::Error {
    fn from(err: ColorError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        let err = ColorError::InvalidLength {
            input: "#abcd".to_string(),
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid hex length 4 in \"#abcd\" (expected 3 or 6 digits)"
        );

        let err = ColorError::InvalidDigit {
            input: "zzzzzz".to_string(),
        };
        assert!(err.to_string().contains("zzzzzz"));
    }
}
