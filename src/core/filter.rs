//! Filter selector for the visible transaction list.

use crate::{
    core::transaction::TransactionType,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Which transactions are listed for display. Totals ignore the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every transaction
    #[default]
    All,
    /// Income only
    Income,
    /// Expenses only
    Expense,
}

impl Filter {
    /// Returns true if a transaction of the given type passes this filter.
    #[must_use]
    pub const fn matches(self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => matches!(kind, TransactionType::Income),
            Self::Expense => matches!(kind, TransactionType::Expense),
        }
    }

    /// Lowercase selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl From<TransactionType> for Filter {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::InvalidFilter {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_matches() {
        assert!(Filter::All.matches(TransactionType::Income));
        assert!(Filter::All.matches(TransactionType::Expense));
        assert!(Filter::Income.matches(TransactionType::Income));
        assert!(!Filter::Income.matches(TransactionType::Expense));
        assert!(Filter::Expense.matches(TransactionType::Expense));
        assert!(!Filter::Expense.matches(TransactionType::Income));
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("INCOME".parse::<Filter>().unwrap(), Filter::Income);
        assert_eq!(Filter::Expense.to_string(), "expense");
        assert!(matches!(
            "pending".parse::<Filter>(),
            Err(Error::InvalidFilter { value }) if value == "pending"
        ));
    }
}
