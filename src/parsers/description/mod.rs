//! Description parsing: derives payee, memo and transaction kind from the
//! free-text description column.

mod bank;
mod card;
mod clean;
mod rules;
mod types;

pub use bank::BankDescriptionParser;
pub use card::CardDescriptionParser;
pub use clean::clean_whitespace;
pub use types::{Classification, TransactionKind};

use crate::parsers::traits::DescriptionParser;
use crate::types::StatementType;

/// Classify `description` with the rule set belonging to `statement_type`.
pub fn classify(description: &str, statement_type: StatementType) -> Classification {
    match statement_type {
        StatementType::Card => CardDescriptionParser::classify(description),
        StatementType::Bank => BankDescriptionParser::classify(description),
    }
}

pub mod prelude {
    pub use super::{
        BankDescriptionParser, CardDescriptionParser, Classification, TransactionKind, classify,
        clean_whitespace,
    };
}
