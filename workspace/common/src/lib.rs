//! Value types shared by the dashboard frontend and anything that feeds it.
//!
//! These are display-scoped shapes: nothing here is persisted or computed from
//! other values. Amounts are decimals, dates are calendar dates.

mod cash_flow;
mod forecast;
mod format;
mod metric;
mod transaction;

pub use cash_flow::CashFlowPoint;
pub use forecast::ForecastHorizon;
pub use format::{format_amount, format_signed_amount, group_thousands};
pub use metric::{Metric, Tone, Trend};
pub use transaction::{Transaction, TransactionKind};
