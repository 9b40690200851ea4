use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::errors::{ConvertError, ConvertResult};

/// Number of positional columns in an easybank export.
pub const FIELD_COUNT: usize = 6;

/// One export row before any normalisation; columns are positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub account: String,
    pub description: String,
    pub date: String,
    pub value_date: String,
    pub amount: String,
    pub currency: String,
    /// 1-based line of the row in the input, 0 when unknown.
    #[serde(skip)]
    pub line: u64,
}

impl RawRow {
    /// Row as it appeared in the export, for debug dumps.
    pub fn to_line(&self) -> String {
        [
            self.account.as_str(),
            self.description.as_str(),
            self.date.as_str(),
            self.value_date.as_str(),
            self.amount.as_str(),
            self.currency.as_str(),
        ]
        .join(";")
    }

    /// Take the six positional fields of `record`, found at input line `line`.
    ///
    /// A trailing `\r` left by CRLF line endings is dropped from every field.
    pub fn from_record(record: &StringRecord, line: u64) -> ConvertResult<Self> {
        let fields: Vec<String> =
            record.iter().map(|f| f.trim_end_matches('\r').to_string()).collect();

        if fields.len() < FIELD_COUNT {
            // A blank line reads as a single empty field.
            let blank = fields.len() == 1 && fields[0].is_empty();
            let fields = if blank { Vec::new() } else { fields };
            return Err(ConvertError::MalformedRow { line, found: fields.len(), fields });
        }

        let mut fields = fields.into_iter();
        let mut field = || fields.next().unwrap_or_default();
        Ok(RawRow {
            account: field(),
            description: field(),
            date: field(),
            value_date: field(),
            amount: field(),
            currency: field(),
            line,
        })
    }
}
