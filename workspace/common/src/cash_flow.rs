use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of aggregated cash movement.
///
/// Sequences of points are kept in chronological order by whoever produces
/// them; nothing here enforces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowPoint {
    pub date: NaiveDate,
    pub inflow: Decimal,
    pub outflow: Decimal,
    pub balance: Decimal,
}

impl CashFlowPoint {
    pub fn new(date: NaiveDate, inflow: Decimal, outflow: Decimal, balance: Decimal) -> Self {
        Self {
            date,
            inflow,
            outflow,
            balance,
        }
    }
}
