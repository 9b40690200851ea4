use std::fmt;

use serde::Serialize;

use crate::parsers::description::TransactionKind;

/// Per-run tally of converted transactions by kind.
///
/// Kinds are kept in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    kinds: Vec<(TransactionKind, usize)>,
    skipped: usize,
}

impl ConversionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: TransactionKind) {
        match self.kinds.iter_mut().find(|(seen, _)| *seen == kind) {
            Some((_, count)) => *count += 1,
            None => self.kinds.push((kind, 1)),
        }
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn count(&self, kind: TransactionKind) -> usize {
        self.kinds
            .iter()
            .find(|(seen, _)| *seen == kind)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransactionKind, usize)> + '_ {
        self.kinds.iter().copied()
    }

    /// Number of converted transactions; skipped rows are not included.
    pub fn total(&self) -> usize {
        self.kinds.iter().map(|(_, count)| count).sum()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, count) in self.iter() {
            writeln!(f, "  {kind}:\t{count}")?;
        }
        writeln!(f, "total transactions converted: {}", self.total())?;
        if self.skipped > 0 {
            writeln!(f, "invalid rows skipped: {}", self.skipped)?;
        }
        Ok(())
    }
}
