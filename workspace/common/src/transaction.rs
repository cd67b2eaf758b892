use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::format_signed_amount;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single booked transaction.
///
/// `kind` and the sign of `amount` are expected to agree but are not
/// cross-checked; display colour follows the sign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// True when the amount is strictly positive.
    pub fn is_inflow(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn display_amount(&self) -> String {
        format_signed_amount(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(amount: Decimal, kind: TransactionKind) -> Transaction {
        Transaction {
            id: "1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
            description: "Client Payment - ABC Corp".to_string(),
            amount,
            kind,
        }
    }

    #[test]
    fn test_sign_drives_display() {
        let income = transaction(Decimal::new(15000, 0), TransactionKind::Income);
        assert!(income.is_inflow());
        assert_eq!(income.display_amount(), "+$15,000");

        let expense = transaction(Decimal::new(-3500, 0), TransactionKind::Expense);
        assert!(!expense.is_inflow());
        assert_eq!(expense.display_amount(), "$3,500");
    }

    #[test]
    fn test_kind_is_not_cross_checked() {
        // A negative "income" still renders as an outflow.
        let odd = transaction(Decimal::new(-10, 0), TransactionKind::Income);
        assert!(!odd.is_inflow());
        assert_eq!(odd.kind, TransactionKind::Income);
    }

    #[test]
    fn test_kind_serialized_as_type_field() {
        let value = serde_json::to_value(transaction(
            Decimal::new(8500, 0),
            TransactionKind::Income,
        ))
        .expect("serialize transaction");

        assert_eq!(value["type"], "income");
        assert_eq!(value["date"], "2025-08-03");
        assert_eq!(value["amount"], "8500");
    }
}
