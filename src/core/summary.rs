//! Aggregated totals and two-decimal display helpers.
//!
//! Totals are always computed over the whole store, never over the filtered list,
//! and are recomputed on every call.

use crate::core::transaction::{Transaction, TransactionType};

/// Income, expense and balance over every transaction in the store.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    /// Sum of income amounts
    pub income: f64,
    /// Sum of expense amounts
    pub expense: f64,
    /// `income - expense`
    pub balance: f64,
}

/// Sign of the balance, which a display layer maps to a colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceTone {
    /// Balance above zero
    Positive,
    /// Balance below zero
    Negative,
    /// Balance exactly zero
    Zero,
}

impl Summary {
    /// Sums the given transactions by type.
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (income, expense) =
            transactions
                .into_iter()
                .fold((0.0, 0.0), |(income, expense), t| match t.kind {
                    TransactionType::Income => (income + t.amount, expense),
                    TransactionType::Expense => (income, expense + t.amount),
                });

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Classifies the balance by sign.
    #[must_use]
    pub fn tone(&self) -> BalanceTone {
        if self.balance > 0.0 {
            BalanceTone::Positive
        } else if self.balance < 0.0 {
            BalanceTone::Negative
        } else {
            BalanceTone::Zero
        }
    }
}

/// Formats a value as dollars with two decimals, e.g. `$995.50`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    // Adding positive zero turns -0.0 into 0.0
    let value = value + 0.0;
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    fn entry(id: i64, amount: f64, kind: TransactionType) -> Transaction {
        Transaction {
            id,
            description: format!("entry {id}"),
            amount,
            category: "misc".to_string(),
            kind,
            date: "1/1/2024".to_string(),
        }
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = Summary::from_transactions(std::iter::empty::<&Transaction>());
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.tone(), BalanceTone::Zero);
    }

    #[test]
    fn test_sums_by_type() {
        let entries = [
            entry(1, 1000.0, TransactionType::Income),
            entry(2, 4.5, TransactionType::Expense),
            entry(3, 250.25, TransactionType::Expense),
        ];
        let summary = Summary::from_transactions(&entries);
        assert_eq!(summary.income, 1000.0);
        assert_eq!(summary.expense, 254.75);
        assert_eq!(summary.balance, summary.income - summary.expense);
        assert_eq!(summary.tone(), BalanceTone::Positive);
    }

    #[test]
    fn test_negative_balance_tone() {
        let entries = [entry(1, 20.0, TransactionType::Expense)];
        let summary = Summary::from_transactions(&entries);
        assert_eq!(summary.balance, -20.0);
        assert_eq!(summary.tone(), BalanceTone::Negative);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(995.5), "$995.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
        assert_eq!(format_currency(-12.5), "$-12.50");
    }
}
