//! Convert easybank / BAWAG CSV statement exports into QIF.
//!
//! Each row's free-text description is broken down into payee, memo and a
//! transaction kind (`withdraw`, `transfer`, `bankfee`, ...), so the QIF can be
//! imported into accounting tools without manual clean-up.
//!
//! ```rust,ignore
//! use easybank_qif::{ConverterBuilder, StatementType};
//!
//! let summary = ConverterBuilder::new()
//!     .statement_type(StatementType::Bank)
//!     .convert(input, output)?;
//! ```

mod builder;
mod converter;
mod summary;
mod types;

pub mod encoding;
pub mod errors;
pub mod parsers;
pub mod qif;

pub use builder::ConverterBuilder;
pub use converter::{Converter, ConverterConfig, Verbosity};
pub use parsers::prelude::*;
pub use summary::ConversionSummary;
pub use types::{StatementType, TransactionRecord};
