use std::io::{BufWriter, Write};

use crate::errors::ConvertResult;
use crate::types::{StatementType, TransactionRecord};

/// Render one transaction as a QIF block, terminated by `^`.
///
/// ```text
/// D2024-03-05
/// T-100.00
/// MAuszahlung Karte BG/123456 Filiale Wien
/// PMyself
/// Nwithdraw
/// ^
/// ```
pub fn render_record(record: &TransactionRecord) -> String {
    let mut block = format!("D{}\nT{}\nM{}\n", record.date, record.amount, record.memo());
    if let Some(payee) = record.payee() {
        block.push_str(&format!("P{payee}\n"));
    }
    block.push_str(&format!("N{}\n^\n", record.kind()));
    block
}

/// Buffered QIF writer over any [`Write`] sink.
pub struct QifWriter<W: Write> {
    inner: BufWriter<W>,
    header_written: bool,
}

impl<W: Write> QifWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
            header_written: false,
        }
    }

    /// Writes `!Type:<token>` once; later calls are no-ops.
    pub fn write_header(&mut self, statement_type: StatementType) -> ConvertResult<()> {
        if !self.header_written {
            writeln!(self.inner, "!Type:{}", statement_type.token())?;
            self.header_written = true;
        }
        Ok(())
    }

    pub fn write(&mut self, record: &TransactionRecord) -> ConvertResult<()> {
        self.inner.write_all(render_record(record).as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> ConvertResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}
