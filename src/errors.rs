use thiserror::Error;

/// Errors raised while converting a statement export into QIF
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Row carries fewer than the six positional fields, a blank line none at all.
    /// The converter skips it and keeps going
    #[error("Malformed row at line {line}: expected 6 fields, found {found}")]
    MalformedRow {
        line: u64,
        found: usize,
        fields: Vec<String>,
    },

    /// Date column does not match the configured format (or is not a real calendar date)
    #[error("Invalid date '{value}' (expected format {format})")]
    DateParse { value: String, format: String },

    /// Amount column holds more than one decimal point once the locale separators are swapped
    #[error("Invalid amount '{0}'")]
    AmountParse(String),

    #[error("Unknown encoding label '{0}'")]
    UnknownEncoding(String),

    /// The builder was asked to convert without a statement type
    #[error("Statement type is required")]
    MissingStatementType,

    // ── Wrapped errors ───────────────────────────────────────────────────────────

    #[error("Failed to read CSV row: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record for debug output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConvertError::MalformedRow { line: 7, found: 4, fields: vec![] };
        assert_eq!(err.to_string(), "Malformed row at line 7: expected 6 fields, found 4");

        let err = ConvertError::DateParse {
            value: "2024/01/01".into(),
            format: "%d.%m.%Y".into(),
        };
        assert_eq!(err.to_string(), "Invalid date '2024/01/01' (expected format %d.%m.%Y)");

        let err = ConvertError::AmountParse("1,2,3".into());
        assert_eq!(err.to_string(), "Invalid amount '1,2,3'");
    }
}
