use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ConvertError, ConvertResult};

/// Date format of the easybank export (`DD.MM.YYYY`).
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Date column as exported, parsed on demand with a chrono format string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvDate(String);

impl CsvDate {
    pub fn parse(&self) -> ConvertResult<NaiveDate> {
        self.parse_with(DEFAULT_DATE_FORMAT)
    }

    pub fn parse_with(&self, format: &str) -> ConvertResult<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), format).map_err(|_| ConvertError::DateParse {
            value: self.0.clone(),
            format: format.to_string(),
        })
    }
}

impl From<String> for CsvDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<CsvDate> for NaiveDate {
    type Error = ConvertError;

    fn try_from(date: CsvDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}

/// Amount column in the export locale: `.` groups thousands, `,` separates decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvAmount(String);

impl CsvAmount {
    /// `1.234,56` -> `1234.56`
    pub fn normalize(&self) -> String {
        self.0.trim().replace('.', "").replace(',', ".")
    }

    /// Normalised amount text, rejected only when it holds more than one decimal point.
    ///
    /// Sign, leading zeros and scale pass through untouched (`+007,50` -> `+007.50`), and
    /// an empty cell stays empty.
    pub fn parse(&self) -> ConvertResult<String> {
        let normalized = self.normalize();
        if normalized.matches('.').count() > 1 {
            return Err(ConvertError::AmountParse(self.0.clone()));
        }
        Ok(normalized)
    }
}

impl From<String> for CsvAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
