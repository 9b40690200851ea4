use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable transaction kind written to the QIF `N` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "withdraw")]
    Withdraw,
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "bankfee")]
    BankFee,
    #[serde(rename = "payment")]
    Payment,
    #[serde(rename = "credit card bill")]
    CreditCardBill,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Withdraw => "withdraw",
            TransactionKind::Transfer => "transfer",
            TransactionKind::BankFee => "bankfee",
            TransactionKind::Payment => "payment",
            TransactionKind::CreditCardBill => "credit card bill",
            TransactionKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing one description.
///
/// `payee`, `memo` and `kind` end up in the QIF output. The remaining fields are
/// the intermediate pieces pulled out of the description and are kept for debug dumps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Classification {
    pub payee: Option<String>,
    /// Always the whitespace-cleaned raw description.
    pub memo: String,
    pub kind: TransactionKind,
    /// Memo assembled by the bank rule cascade. It is never written to QIF: the
    /// cleaned raw description in `memo` replaces it. Kept so debug output shows both.
    pub cascade_memo: Option<String>,
    pub desc1: String,
    pub desc2: String,
    pub type_code: Option<String>,
    pub reference_id: Option<String>,
}
