//! Classification cascade for bank-account descriptions.
//!
//! Rules are evaluated in order and the first one whose predicate holds is applied.
//! When none holds, the fallback joins both description halves into the memo.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::TransactionKind;

/// `<account-like token> <two words><rest>` inside a transfer detail.
static ACCOUNT_HOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([A-Z0-9]+\W)?[A-Z]*[0-9]+)\W(\w+\W+\w+)\W*(.*)$")
        .expect("account holder pattern is valid")
});

/// `<IBAN> <rest>` inside a transfer detail.
static IBAN_HOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{2}[0-9]{18})\s+(.*)$").expect("IBAN holder pattern is valid")
});

static MAESTRO_WITHDRAWAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((Auszahlung)\W+\w+)\W*(.*)$").expect("withdrawal pattern is valid")
});

static MAESTRO_PAYMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((Bezahlung)\W+\w+)\W*(.*)$").expect("payment pattern is valid")
});

/// `[account-like token] <word><rest>`
static OPTIONAL_ACCOUNT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([A-Z0-9]+\W)?[A-Z]*[0-9]+)?\W*(\w+)\W*(.*)$")
        .expect("payee word pattern is valid")
});

/// `[account-like token] <two words><rest>`
static OPTIONAL_ACCOUNT_TWO_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([A-Z0-9]+\W)?[A-Z]*[0-9]+)?\W*(\w+\W+\w+)\W*(.*)$")
        .expect("payee words pattern is valid")
});

/// Mutable classification state threaded through the cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Draft {
    pub desc1: String,
    pub desc2: String,
    pub type_code: String,
    pub reference_id: String,
    pub payee: Option<String>,
    pub memo: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl Draft {
    fn code_is(&self, code: &str) -> bool {
        self.type_code == code
    }

    fn code_in(&self, codes: &[&str]) -> bool {
        codes.contains(&self.type_code.as_str())
    }

    fn has_desc1(&self) -> bool {
        !self.desc1.is_empty()
    }

    fn has_desc2(&self) -> bool {
        !self.desc2.is_empty()
    }

    fn joined(&self) -> String {
        format!("{} {}", self.desc1, self.desc2)
    }
}

pub(super) struct Rule {
    pub name: &'static str,
    applies: fn(&Draft) -> bool,
    apply: fn(&mut Draft),
}

pub(super) static CASCADE: [Rule; 9] = [
    Rule { name: "cash withdrawal", applies: is_cash_withdrawal, apply: cash_withdrawal },
    Rule { name: "transfer", applies: is_transfer, apply: transfer },
    Rule { name: "bank fee (desc1)", applies: is_fee_without_desc2, apply: fee_from_desc1 },
    Rule { name: "bank fee (desc2)", applies: is_fee_without_desc1, apply: fee_from_desc2 },
    Rule {
        name: "maestro (desc2 only)",
        applies: is_maestro_without_desc1,
        apply: memo_from_desc2,
    },
    Rule {
        name: "maestro (desc1 only)",
        applies: is_maestro_without_desc2,
        apply: memo_from_desc1,
    },
    Rule { name: "maestro", applies: is_maestro, apply: maestro },
    Rule { name: "VD", applies: is_vd, apply: vd },
    Rule { name: "OG", applies: is_og, apply: og },
];

/// Apply the first matching rule and return its name.
pub(super) fn apply(draft: &mut Draft) -> &'static str {
    match CASCADE.iter().find(|rule| (rule.applies)(draft)) {
        Some(rule) => {
            (rule.apply)(draft);
            rule.name
        }
        None => {
            fallback(draft);
            "fallback"
        }
    }
}

fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}

// ── Predicates ──────────────────────────────────────────────────────────────────

fn is_cash_withdrawal(d: &Draft) -> bool {
    d.code_is("BG") && matches!(d.desc1.as_str(), "Auszahlung Karte" | "Auszahlung Maestro")
}

fn is_transfer(d: &Draft) -> bool {
    d.code_in(&["BG", "FE"]) && d.has_desc1() && d.has_desc2()
}

fn is_fee_without_desc2(d: &Draft) -> bool {
    d.code_in(&["BG", "RI"]) && !d.has_desc2()
}

fn is_fee_without_desc1(d: &Draft) -> bool {
    d.code_in(&["BG", "RI"]) && !d.has_desc1()
}

fn is_maestro_without_desc1(d: &Draft) -> bool {
    d.code_is("MC") && !d.has_desc1()
}

fn is_maestro_without_desc2(d: &Draft) -> bool {
    d.code_is("MC") && !d.has_desc2()
}

fn is_maestro(d: &Draft) -> bool {
    d.code_is("MC") && d.has_desc1() && d.has_desc2()
}

fn is_vd(d: &Draft) -> bool {
    d.code_is("VD")
}

fn is_og(d: &Draft) -> bool {
    d.code_is("OG")
}

// ── Handlers ────────────────────────────────────────────────────────────────────

fn cash_withdrawal(d: &mut Draft) {
    d.kind = Some(TransactionKind::Withdraw);
    d.memo = Some(d.joined());
    d.payee = Some("Myself".to_string());
}

fn transfer(d: &mut Draft) {
    d.kind = Some(TransactionKind::Transfer);

    // Last `|` segment is a trailing reference, not part of the counterparty.
    let mut segments: Vec<&str> = d.desc2.split('|').collect();
    segments.pop();
    let detail = segments.join("|");

    if let Some(caps) = ACCOUNT_HOLDER.captures(&detail) {
        let rest = group(&caps, 4);
        d.payee = Some(format!("{} {}", group(&caps, 3), rest));
        d.memo = Some(format!("{} {}", d.desc1, rest));
        d.desc2 = group(&caps, 1).to_string();
    } else if let Some(caps) = IBAN_HOLDER.captures(&detail) {
        let holder = group(&caps, 2);
        // Payee repeats the holder name.
        d.payee = Some(format!("{holder} {holder}"));
        d.memo = Some(holder.to_string());
        d.desc2 = holder.to_string();
    } else {
        d.desc2 = detail;
    }
}

fn fee_from_desc1(d: &mut Draft) {
    d.kind = Some(TransactionKind::BankFee);
    d.memo = Some(d.desc1.clone());
    d.payee = Some("Bank".to_string());
}

fn fee_from_desc2(d: &mut Draft) {
    d.kind = Some(TransactionKind::BankFee);
    d.memo = Some(d.desc2.clone());
    d.payee = Some("Bank".to_string());
}

fn memo_from_desc2(d: &mut Draft) {
    d.memo = Some(d.desc2.clone());
}

fn memo_from_desc1(d: &mut Draft) {
    d.memo = Some(d.desc1.clone());
}

/// `Auszahlung Maestro (detail) desc2`
fn with_detail(caps: &Captures<'_>, desc2: &str) -> String {
    let mut memo = group(caps, 1).to_string();
    let detail = group(caps, 3);
    if !detail.is_empty() {
        memo.push_str(&format!(" ({detail})"));
    }
    memo.push(' ');
    memo.push_str(desc2);
    memo
}

fn maestro(d: &mut Draft) {
    if let Some(caps) = MAESTRO_WITHDRAWAL.captures(&d.desc1) {
        let memo = with_detail(&caps, &d.desc2);
        d.kind = Some(TransactionKind::Withdraw);
        d.memo = Some(memo);
        d.payee = Some("Myself".to_string());
    } else if let Some(caps) = MAESTRO_PAYMENT.captures(&d.desc1) {
        let memo = with_detail(&caps, &d.desc2);
        d.kind = Some(TransactionKind::Payment);
        d.memo = Some(memo);
    } else {
        d.kind = Some(if d.desc2.starts_with("Abrechnung") {
            TransactionKind::CreditCardBill
        } else {
            TransactionKind::Unknown
        });
        d.memo = Some(d.joined());
        d.payee = Some("Bank".to_string());
    }
}

fn vd(d: &mut Draft) {
    if d.has_desc1() && !d.has_desc2() {
        d.kind = Some(TransactionKind::Payment);
        d.memo = Some(d.desc1.clone());
    } else if d.has_desc1() && d.has_desc2() {
        d.kind = Some(TransactionKind::Transfer);
        d.memo = Some(d.desc1.clone());
        if let Some(caps) = OPTIONAL_ACCOUNT_WORD.captures(&d.desc2) {
            let payee = format!("{} {}", group(&caps, 3), group(&caps, 4));
            d.payee = Some(payee);
        }
    }
}

fn og(d: &mut Draft) {
    d.kind = Some(TransactionKind::Payment);
    if d.has_desc1() && d.has_desc2() {
        let mut memo = d.desc1.clone();
        if let Some(caps) = OPTIONAL_ACCOUNT_TWO_WORDS.captures(&d.desc2) {
            let rest = group(&caps, 4);
            let payee = format!("{} {}", group(&caps, 3), rest);
            memo.push(' ');
            memo.push_str(rest);
            d.payee = Some(payee);
        }
        d.memo = Some(memo);
    } else {
        d.memo = Some(d.joined());
    }
}

fn fallback(d: &mut Draft) {
    d.memo = Some(d.joined());
}
