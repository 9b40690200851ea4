use super::{Classification, clean_whitespace};
use crate::parsers::traits::DescriptionParser;

/// Card statements: `payee|detail|...`.
pub struct CardDescriptionParser;

impl DescriptionParser for CardDescriptionParser {
    fn classify(description: &str) -> Classification {
        let mut segments = description.split('|').map(str::trim);
        let payee = segments.next().unwrap_or_default();
        let detail = segments.next().unwrap_or_default();

        Classification {
            payee: Some(clean_whitespace(payee)),
            memo: clean_whitespace(description),
            desc1: detail.to_string(),
            ..Classification::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::description::TransactionKind;
    use rstest::rstest;

    #[rstest]
    #[case("Amazon|Order 123", Some("Amazon"), "Amazon|Order 123", "Order 123")]
    #[case("  SPAR  DANKT | Wien ", Some("SPAR DANKT"), "SPAR DANKT | Wien", "Wien")]
    #[case("Netflix", Some("Netflix"), "Netflix", "")]
    #[case("", Some(""), "", "")]
    fn test_card_description(
        #[case] description: &str,
        #[case] payee: Option<&str>,
        #[case] memo: &str,
        #[case] desc1: &str,
    ) {
        let classification = CardDescriptionParser::classify(description);

        assert_eq!(classification.payee.as_deref(), payee);
        assert_eq!(classification.memo, memo);
        assert_eq!(classification.desc1, desc1);
        assert_eq!(classification.kind, TransactionKind::Unknown);
        assert!(classification.type_code.is_none());
    }
}
