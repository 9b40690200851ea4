use crate::parsers::description::Classification;

/// Turns one free-text bank description into a structured classification.
///
/// Implementations are pure and total: unparseable text degrades to
/// [`TransactionKind::Unknown`](crate::TransactionKind::Unknown) instead of failing.
pub trait DescriptionParser {
    fn classify(description: &str) -> Classification;
}
