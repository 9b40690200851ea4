use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use super::rules::{self, Draft};
use super::{Classification, clean_whitespace};
use crate::parsers::traits::DescriptionParser;

/// `<desc1><CODE>/<digits><desc2>`, where the last `XX/123` pair in the text wins.
static TYPE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)\W*([A-Z]{2})/([0-9]+)\W*(.*)?$").expect("type code pattern is valid")
});

/// Bank-account statements, where the description embeds a two-letter type
/// code and a reference number.
pub struct BankDescriptionParser;

impl BankDescriptionParser {
    fn split(description: &str) -> Option<Draft> {
        let caps = TYPE_CODE.captures(description)?;
        let text = |index: usize| caps.get(index).map_or("", |m| m.as_str());

        Some(Draft {
            desc1: text(1).trim().to_string(),
            type_code: text(2).to_string(),
            reference_id: text(3).to_string(),
            desc2: text(4).trim().to_string(),
            ..Draft::default()
        })
    }
}

impl DescriptionParser for BankDescriptionParser {
    fn classify(description: &str) -> Classification {
        let Some(mut draft) = Self::split(description) else {
            return Classification {
                memo: clean_whitespace(description),
                ..Classification::default()
            };
        };

        let rule = rules::apply(&mut draft);
        trace!("rule '{rule}' matched type code {}", draft.type_code);

        // Memo is the cleaned raw description whatever the cascade produced;
        // the cascade's own memo only survives as `cascade_memo`.
        Classification {
            payee: draft.payee.as_deref().map(clean_whitespace),
            memo: clean_whitespace(description),
            kind: draft.kind.unwrap_or_default(),
            cascade_memo: draft.memo,
            desc1: draft.desc1,
            desc2: draft.desc2,
            type_code: Some(draft.type_code),
            reference_id: Some(draft.reference_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::description::TransactionKind;
    use rstest::rstest;

    #[rstest]
    #[case(
        "Auszahlung Karte BG/123456 Filiale Wien",
        "Auszahlung Karte",
        "BG",
        "123456",
        "Filiale Wien"
    )]
    #[case("Eingang MC/1 Text BG/22 Rest", "Eingang MC/1 Text", "BG", "22", "Rest")]
    #[case("VD/7 OG/000000009", "VD/7", "OG", "000000009", "")]
    fn test_split_takes_last_code(
        #[case] description: &str,
        #[case] desc1: &str,
        #[case] type_code: &str,
        #[case] reference_id: &str,
        #[case] desc2: &str,
    ) {
        let draft = BankDescriptionParser::split(description).unwrap();
        assert_eq!(draft.desc1, desc1);
        assert_eq!(draft.type_code, type_code);
        assert_eq!(draft.reference_id, reference_id);
        assert_eq!(draft.desc2, desc2);
    }

    #[test]
    fn test_last_code_selects_rule() {
        let classification = BankDescriptionParser::classify("Bezahlung MC/1 Kontoführung BG/22");

        assert_eq!(classification.type_code.as_deref(), Some("BG"));
        assert_eq!(classification.kind, TransactionKind::BankFee);
        assert_eq!(classification.payee.as_deref(), Some("Bank"));
    }

    #[test]
    fn test_split_without_code() {
        assert!(BankDescriptionParser::split("Gutschrift Lohn").is_none());
        assert!(BankDescriptionParser::split("Abrechnung 03/2024").is_none());
    }

    #[rstest]
    #[case("Auszahlung Karte BG/123456 Filiale Wien", TransactionKind::Withdraw, Some("Myself"))]
    #[case("Auszahlung Maestro BG/000000017", TransactionKind::Withdraw, Some("Myself"))]
    #[case(
        "Überweisung BG/000004567 AT611904300234573201 Max Mustermann|Miete",
        TransactionKind::Transfer,
        Some("Max Mustermann")
    )]
    #[case("Kontoführung BG/000000001", TransactionKind::BankFee, Some("Bank"))]
    #[case("RI/000000002 Habenzinsen", TransactionKind::BankFee, Some("Bank"))]
    #[case("MC/000000003 BILLA DANKT", TransactionKind::Unknown, None)]
    #[case("Bezahlung Maestro 1234 MC/000000004 BILLA DANKT", TransactionKind::Payment, None)]
    #[case("Auszahlung Maestro 14:00 MC/000000005 Wien", TransactionKind::Withdraw, Some("Myself"))]
    #[case(
        "Kreditkarte MC/000000006 Abrechnung Jänner",
        TransactionKind::CreditCardBill,
        Some("Bank")
    )]
    #[case("Bezahlung Karte VD/000000007", TransactionKind::Payment, None)]
    #[case(
        "Lastschrift VD/000000008 AT123456789 Wien Energie",
        TransactionKind::Transfer,
        Some("Wien Energie")
    )]
    #[case(
        "Online Banking OG/000000009 AT123456789 Max Mustermann Miete",
        TransactionKind::Payment,
        Some("Max Mustermann Miete")
    )]
    #[case("Zinsen XY/000000010 Haben", TransactionKind::Unknown, None)]
    fn test_classify_bank_description(
        #[case] description: &str,
        #[case] kind: TransactionKind,
        #[case] payee: Option<&str>,
    ) {
        let classification = BankDescriptionParser::classify(description);

        assert_eq!(classification.kind, kind);
        assert_eq!(classification.payee.as_deref(), payee);
        assert_eq!(classification.memo, clean_whitespace(description));
    }

    #[test]
    fn test_unmatched_description_falls_back_to_raw_text() {
        let classification = BankDescriptionParser::classify("  Gutschrift   Lohn ");

        assert_eq!(classification.kind, TransactionKind::Unknown);
        assert_eq!(classification.memo, "Gutschrift Lohn");
        assert!(classification.payee.is_none());
        assert!(classification.type_code.is_none());
        assert!(classification.cascade_memo.is_none());
    }

    #[test]
    fn test_memo_is_raw_description_not_cascade_memo() {
        let classification =
            BankDescriptionParser::classify("Auszahlung Karte BG/123456   Filiale Wien");

        assert_eq!(classification.memo, "Auszahlung Karte BG/123456 Filiale Wien");
        assert_eq!(classification.cascade_memo.as_deref(), Some("Auszahlung Karte Filiale Wien"));
        assert_eq!(classification.type_code.as_deref(), Some("BG"));
        assert_eq!(classification.reference_id.as_deref(), Some("123456"));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let description = "Lastschrift VD/000000008 AT123456789 Wien Energie";
        assert_eq!(
            BankDescriptionParser::classify(description),
            BankDescriptionParser::classify(description)
        );
    }
}
