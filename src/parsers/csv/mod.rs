pub mod dto;
pub mod parser;
pub mod types;

pub mod prelude {
    pub use super::dto::{FIELD_COUNT, RawRow};
    pub use super::parser::RowParser;
    pub use super::types::{CsvAmount, CsvDate, DEFAULT_DATE_FORMAT};
}
