use std::io::{self, Read};
use std::ops::Range;

use csv::{ReaderBuilder, StringRecordsIntoIter, Terminator};

use super::dto::RawRow;
use crate::errors::{ConvertError, ConvertResult};

/// Iterates the semicolon-separated rows of an export.
///
/// Short rows and blank lines come back as
/// [`ConvertError::MalformedRow`](crate::errors::ConvertError::MalformedRow), numbered by
/// their line in the input, and iteration continues after them.
pub struct RowParser<R> {
    records: StringRecordsIntoIter<LineTerminated<R>>,
    /// First input line not yet attributed to a row.
    next_line: u64,
    blank_lines: Range<u64>,
    pending: Option<ConvertResult<RawRow>>,
}

impl<R: Read> RowParser<R> {
    pub fn new(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(b';')
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(true)
            .from_reader(LineTerminated::new(input));

        Self {
            records: reader.into_records(),
            next_line: 1,
            blank_lines: 0..0,
            pending: None,
        }
    }

    fn blank_line(line: u64) -> ConvertError {
        ConvertError::MalformedRow { line, found: 0, fields: Vec::new() }
    }
}

impl<R: Read> Iterator for RowParser<R> {
    type Item = ConvertResult<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.blank_lines.next() {
            return Some(Err(Self::blank_line(line)));
        }
        if let Some(row) = self.pending.take() {
            return Some(row);
        }

        // The reader skips empty lines on its own; they show up as extra lines consumed.
        let next = self.records.next();
        let consumed = self.records.reader().position().line();
        let start = self.next_line;
        self.next_line = consumed;

        match next {
            Some(Ok(record)) => {
                let embedded: u64 = record.iter().map(|f| f.matches('\n').count() as u64).sum();
                let line = consumed.saturating_sub(embedded + 1).max(start);
                self.blank_lines = start..line;
                self.pending = Some(RawRow::from_record(&record, line));
                self.next()
            }
            Some(Err(e)) => Some(Err(e.into())),
            None => {
                self.blank_lines = start..consumed;
                self.blank_lines.next().map(|line| Err(Self::blank_line(line)))
            }
        }
    }
}

/// Ends the input with `\n` when the last line lacks one, so every row is terminated.
struct LineTerminated<R> {
    inner: R,
    last: Option<u8>,
    finished: bool,
}

impl<R> LineTerminated<R> {
    fn new(inner: R) -> Self {
        Self { inner, last: None, finished: false }
    }
}

impl<R: Read> Read for LineTerminated<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.finished || buf.is_empty() {
            return Ok(0);
        }

        let n = self.inner.read(buf)?;
        if n > 0 {
            self.last = Some(buf[n - 1]);
            return Ok(n);
        }

        self.finished = true;
        match self.last {
            Some(byte) if byte != b'\n' => {
                buf[0] = b'\n';
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}
