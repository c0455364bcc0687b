//! Transaction records - the single kind of entry the ledger keeps.
//!
//! A [`Transaction`] is created only by [`crate::core::TransactionStore::add`], which
//! stamps the id and display date. Records are never edited in place; a correction
//! is a delete followed by a fresh add. The serialized shape (`id`, `description`,
//! `amount`, `category`, `type`, `date`) is the persisted snapshot format.

use crate::{
    core::summary::format_currency,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Whether a transaction adds to or draws from the balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionType {
    /// Lowercase name, as used in snapshots and filter selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Display sign for amounts of this type.
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::InvalidTransactionType {
                value: s.to_string(),
            }),
        }
    }
}

/// A recorded income or expense entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id derived from the creation clock reading (milliseconds since epoch)
    pub id: i64,
    /// Trimmed, non-empty description
    pub description: String,
    /// Strictly positive amount
    pub amount: f64,
    /// Opaque category label (e.g. `"food"`, `"salary"`)
    pub category: String,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Display-only creation date (`M/D/YYYY`)
    pub date: String,
}

impl Transaction {
    /// Amount with its sign, e.g. `+$1000.00` or `-$4.50`.
    #[must_use]
    pub fn signed_amount(&self) -> String {
        format!("{}{}", self.kind.sign(), format_currency(self.amount))
    }

    /// Secondary display line: category and date.
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("{} \u{2022} {}", self.category, self.date)
    }

    /// Whether this is an income entry.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Whether this is an expense entry.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// The caller-supplied part of a transaction; the store assigns id and date.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTransaction {
    /// Free text, trimmed by the store
    pub description: String,
    /// Must be finite and greater than zero
    pub amount: f64,
    /// Opaque category label
    pub category: String,
    /// Income or expense
    pub kind: TransactionType,
}

impl NewTransaction {
    /// Builds a candidate from already-typed values.
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        kind: TransactionType,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            kind,
        }
    }

    /// Builds a candidate from raw form text.
    ///
    /// The amount and type are parsed here; description rules are left to the store
    /// (and optionally [`crate::core::rules::validate_description`]).
    pub fn parse(description: &str, amount: &str, category: &str, kind: &str) -> Result<Self> {
        Ok(Self {
            description: description.to_string(),
            amount: crate::core::rules::parse_amount(amount)?,
            category: category.to_string(),
            kind: kind.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn coffee() -> Transaction {
        Transaction {
            id: 1_700_000_000_000,
            description: "Coffee".to_string(),
            amount: 4.5,
            category: "food".to_string(),
            kind: TransactionType::Expense,
            date: "11/14/2023".to_string(),
        }
    }

    #[test]
    fn test_transaction_type_parsing() {
        assert_eq!(
            "income".parse::<TransactionType>().unwrap(),
            TransactionType::Income
        );
        assert_eq!(
            " Expense ".parse::<TransactionType>().unwrap(),
            TransactionType::Expense
        );
        assert!(matches!(
            "transfer".parse::<TransactionType>(),
            Err(Error::InvalidTransactionType { .. })
        ));
    }

    #[test]
    fn test_serialized_shape_uses_type_key() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["description"], "Coffee");
        assert_eq!(json["amount"], 4.5);
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_display_helpers() {
        let expense = coffee();
        assert_eq!(expense.signed_amount(), "-$4.50");
        assert_eq!(expense.subtitle(), "food \u{2022} 11/14/2023");

        let income = Transaction {
            kind: TransactionType::Income,
            amount: 1000.0,
            ..coffee()
        };
        assert_eq!(income.signed_amount(), "+$1000.00");
        assert!(income.is_income());
        assert!(!income.is_expense());
    }

    #[test]
    fn test_new_transaction_parse() {
        let candidate = NewTransaction::parse("Rent", "1200.50", "housing", "expense").unwrap();
        assert_eq!(candidate.amount, 1200.5);
        assert_eq!(candidate.kind, TransactionType::Expense);

        assert!(matches!(
            NewTransaction::parse("Rent", "abc", "housing", "expense"),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(matches!(
            NewTransaction::parse("Rent", "10", "housing", "gift"),
            Err(Error::InvalidTransactionType { .. })
        ));
    }
}
