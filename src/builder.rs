use std::io::{Read, Write};

use crate::{
    converter::{Converter, ConverterConfig, Verbosity},
    encoding,
    errors::{ConvertError, ConvertResult},
    summary::ConversionSummary,
    types::StatementType,
};

/// Fluent setup for a conversion run.
///
/// ```rust,ignore
/// use easybank_qif::{ConverterBuilder, StatementType};
///
/// let summary = ConverterBuilder::new()
///     .statement_type(StatementType::Bank)
///     .input_encoding("latin1")
///     .convert(std::io::stdin(), std::io::stdout())?;
/// eprint!("{summary}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    statement_type: Option<StatementType>,
    date_format: Option<String>,
    input_encoding: Option<String>,
    output_encoding: Option<String>,
    verbosity: Verbosity,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statement_type(mut self, statement_type: StatementType) -> Self {
        self.statement_type = Some(statement_type);
        self
    }

    pub fn date_format(mut self, format: &str) -> Self {
        self.date_format = Some(format.to_string());
        self
    }

    pub fn input_encoding(mut self, label: &str) -> Self {
        self.input_encoding = Some(label.to_string());
        self
    }

    pub fn output_encoding(mut self, label: &str) -> Self {
        self.output_encoding = Some(label.to_string());
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn config(&self) -> ConvertResult<ConverterConfig> {
        let statement_type = self.statement_type.ok_or(ConvertError::MissingStatementType)?;
        let mut config = ConverterConfig::new(statement_type);
        if let Some(format) = &self.date_format {
            config.date_format = format.clone();
        }
        config.verbosity = self.verbosity;
        Ok(config)
    }

    pub fn build(self) -> ConvertResult<Converter> {
        Ok(Converter::new(self.config()?))
    }

    /// Decode `input`, convert it and write the encoded QIF document to `output`.
    ///
    /// Nothing is written to `output` when the run fails.
    pub fn convert<R, W>(self, mut input: R, mut output: W) -> ConvertResult<ConversionSummary>
    where
        R: Read,
        W: Write,
    {
        let input_encoding = encoding::resolve(self.input_encoding.as_deref())?;
        let output_encoding = encoding::resolve(self.output_encoding.as_deref())?;
        let mut converter = self.build()?;

        let mut raw = Vec::new();
        input.read_to_end(&mut raw)?;
        let content = encoding::decode(&raw, input_encoding);

        let mut qif = Vec::new();
        converter.convert(content.as_bytes(), &mut qif)?;

        let text = String::from_utf8_lossy(&qif);
        output.write_all(&encoding::encode(&text, output_encoding))?;
        output.flush()?;

        Ok(converter.into_summary())
    }
}
