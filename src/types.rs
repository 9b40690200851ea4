use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ConvertResult;
use crate::parsers::prelude::*;

/// Which export the rows come from; selects the description rule set.
///
/// The QIF header uses the same token (`!Type:CCard` / `!Type:Bank`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementType {
    #[serde(rename = "CCard")]
    Card,
    #[serde(rename = "Bank")]
    Bank,
}

impl StatementType {
    pub fn token(&self) -> &'static str {
        match self {
            StatementType::Card => "CCard",
            StatementType::Bank => "Bank",
        }
    }

    pub fn classify(self, description: &str) -> Classification {
        classify(description, self)
    }
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One converted transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub account: String,
    /// Description exactly as exported.
    pub raw_description: String,
    pub date: NaiveDate,
    /// Settlement date, passed through untouched.
    pub value_date: String,
    /// Amount with `.` as the only decimal separator, sign and digits as exported.
    pub amount: String,
    pub currency: String,
    pub classification: Classification,
}

impl TransactionRecord {
    /// Normalise the date and amount of `row` and classify its description.
    pub fn build(
        row: &RawRow,
        statement_type: StatementType,
        date_format: &str,
    ) -> ConvertResult<Self> {
        let date = CsvDate::from(row.date.as_str()).parse_with(date_format)?;
        let amount = CsvAmount::from(row.amount.as_str()).parse()?;

        Ok(TransactionRecord {
            account: row.account.clone(),
            raw_description: row.description.clone(),
            date,
            value_date: row.value_date.clone(),
            amount,
            currency: row.currency.clone(),
            classification: statement_type.classify(&row.description),
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.classification.kind
    }

    pub fn payee(&self) -> Option<&str> {
        self.classification.payee.as_deref()
    }

    pub fn memo(&self) -> &str {
        &self.classification.memo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConvertError;
    use rstest::rstest;

    fn row(description: &str, date: &str, amount: &str) -> RawRow {
        RawRow {
            account: "AT001".to_string(),
            description: description.to_string(),
            date: date.to_string(),
            value_date: "06.03.2024".to_string(),
            amount: amount.to_string(),
            currency: "EUR".to_string(),
            line: 1,
        }
    }

    #[rstest]
    #[case(StatementType::Card, "CCard")]
    #[case(StatementType::Bank, "Bank")]
    fn test_statement_type_tokens(#[case] statement_type: StatementType, #[case] token: &str) {
        assert_eq!(statement_type.to_string(), token);
        assert_eq!(serde_json::to_string(&statement_type).unwrap(), format!("\"{token}\""));
    }

    #[test]
    fn test_build_bank_record() {
        let record = TransactionRecord::build(
            &row("Auszahlung Karte BG/123456 Filiale Wien", "05.03.2024", "-1.234,56"),
            StatementType::Bank,
            DEFAULT_DATE_FORMAT,
        )
        .unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(record.date.to_string(), "2024-03-05");
        assert_eq!(record.amount, "-1234.56");
        assert_eq!(record.value_date, "06.03.2024");
        assert_eq!(record.kind(), TransactionKind::Withdraw);
        assert_eq!(record.payee(), Some("Myself"));
        assert_eq!(record.memo(), "Auszahlung Karte BG/123456 Filiale Wien");
        assert_eq!(record.raw_description, "Auszahlung Karte BG/123456 Filiale Wien");
    }

    #[test]
    fn test_build_card_record() {
        let record = TransactionRecord::build(
            &row("Amazon|Order 123", "05.03.2024", "0,99"),
            StatementType::Card,
            DEFAULT_DATE_FORMAT,
        )
        .unwrap();

        assert_eq!(record.payee(), Some("Amazon"));
        assert_eq!(record.memo(), "Amazon|Order 123");
        assert_eq!(record.amount, "0.99");
        assert_eq!(record.kind(), TransactionKind::Unknown);
    }

    #[rstest]
    #[case("31.02.2024", "1,00")]
    #[case("2024-03-05", "1,00")]
    fn test_build_rejects_invalid_date(#[case] date: &str, #[case] amount: &str) {
        let result = TransactionRecord::build(
            &row("x", date, amount),
            StatementType::Bank,
            DEFAULT_DATE_FORMAT,
        );
        assert!(matches!(result.unwrap_err(), ConvertError::DateParse { .. }));
    }

    #[test]
    fn test_build_rejects_invalid_amount() {
        let result = TransactionRecord::build(
            &row("x", "05.03.2024", "1,2,3"),
            StatementType::Bank,
            DEFAULT_DATE_FORMAT,
        );
        assert!(matches!(result.unwrap_err(), ConvertError::AmountParse(_)));
    }

    #[rstest]
    #[case("+1.234,56", "+1234.56")]
    #[case("007,50", "007.50")]
    #[case("-0,00", "-0.00")]
    #[case("", "")]
    fn test_build_keeps_amount_text(#[case] amount: &str, #[case] expected: &str) {
        let record = TransactionRecord::build(
            &row("Gutschrift Lohn", "05.03.2024", amount),
            StatementType::Bank,
            DEFAULT_DATE_FORMAT,
        )
        .unwrap();
        assert_eq!(record.amount, expected);
    }

    #[test]
    fn test_build_with_custom_date_format() {
        let record = TransactionRecord::build(
            &row("Gutschrift Lohn", "2024-03-05", "2.500,00"),
            StatementType::Bank,
            "%Y-%m-%d",
        )
        .unwrap();
        assert_eq!(record.date.to_string(), "2024-03-05");
        assert_eq!(record.amount, "2500.00");
    }

    #[test]
    fn test_record_serialization() {
        let record = TransactionRecord::build(
            &row("Kontoführung BG/000000001", "31.03.2024", "-4,50"),
            StatementType::Bank,
            DEFAULT_DATE_FORMAT,
        )
        .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"bankfee\""));
        assert!(json.contains("2024-03-31"));

        let deserialized: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }
}
