use std::io::{Read, Write};

use log::{debug, warn};

use crate::errors::{ConvertError, ConvertResult};
use crate::parsers::prelude::*;
use crate::qif::QifWriter;
use crate::summary::ConversionSummary;
use crate::types::{StatementType, TransactionRecord};

/// How much the converter reports about a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    /// Print the per-kind tally after the run.
    Summary,
    /// Dump every record at debug level; implies `Summary`.
    Debug,
}

impl Verbosity {
    pub fn wants_summary(&self) -> bool {
        *self >= Verbosity::Summary
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub statement_type: StatementType,
    /// chrono format of the date column.
    pub date_format: String,
    pub verbosity: Verbosity,
}

impl ConverterConfig {
    pub fn new(statement_type: StatementType) -> Self {
        Self {
            statement_type,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            verbosity: Verbosity::default(),
        }
    }
}

/// Streams export rows into QIF and tallies the transaction kinds.
pub struct Converter {
    config: ConverterConfig,
    summary: ConversionSummary,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config, summary: ConversionSummary::new() }
    }

    pub fn summary(&self) -> &ConversionSummary {
        &self.summary
    }

    pub fn into_summary(self) -> ConversionSummary {
        self.summary
    }

    /// Convert every row of `input` and write the QIF document to `output`.
    ///
    /// Short rows and blank lines are logged and skipped. Any other error (bad date or
    /// amount, I/O failure) aborts the run. The summary only covers this run.
    pub fn convert<R: Read, W: Write>(
        &mut self,
        input: R,
        output: W,
    ) -> ConvertResult<&ConversionSummary> {
        self.summary = ConversionSummary::new();

        let mut writer = QifWriter::new(output);
        writer.write_header(self.config.statement_type)?;

        for row in RowParser::new(input) {
            let row = match row {
                Ok(row) => row,
                Err(ConvertError::MalformedRow { line, fields, .. }) => {
                    warn!("ignoring invalid line {line}: {fields:?}");
                    self.summary.record_skipped();
                    continue;
                }
                Err(e) => return Err(e),
            };

            let record = TransactionRecord::build(
                &row,
                self.config.statement_type,
                &self.config.date_format,
            )?;
            writer.write(&record)?;

            if self.config.verbosity == Verbosity::Debug {
                let dump = serde_json::to_string_pretty(&record)?;
                debug!("CSV line {}: \"{}\"", row.line, row.to_line());
                debug!("{dump}");
            }

            self.summary.record(record.kind());
        }

        writer.flush()?;
        Ok(&self.summary)
    }
}
