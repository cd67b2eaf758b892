use chrono::NaiveDate;
use common::{CashFlowPoint, ForecastHorizon, Metric, Tone, Transaction, TransactionKind, Trend};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn dollars(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

pub fn get_mock_cash_flow() -> Vec<CashFlowPoint> {
    vec![
        CashFlowPoint::new(date(2025, 1, 1), dollars(50_000), dollars(30_000), dollars(120_000)),
        CashFlowPoint::new(date(2025, 1, 2), dollars(45_000), dollars(35_000), dollars(130_000)),
        CashFlowPoint::new(date(2025, 1, 3), dollars(60_000), dollars(40_000), dollars(150_000)),
    ]
}

pub fn get_mock_metrics() -> Vec<Metric> {
    vec![
        Metric::new("Current Balance", "$1,234,567", "+12.3%", Trend::Up, Tone::Success),
        Metric::new("Monthly Inflow", "$456,789", "+8.2%", Trend::Up, Tone::Success),
        Metric::new("Monthly Outflow", "$234,567", "-3.1%", Trend::Down, Tone::Danger),
        Metric::new("30-Day Forecast", "$1,456,234", "+15.7%", Trend::Up, Tone::Success),
    ]
}

pub fn get_mock_transactions() -> Vec<Transaction> {
    let txn = |id: &str, date: NaiveDate, description: &str, amount: i64, kind: TransactionKind| Transaction {
        id: id.to_string(),
        date,
        description: description.to_string(),
        amount: dollars(amount),
        kind,
    };

    vec![
        txn("1", date(2025, 8, 3), "Client Payment - ABC Corp", 15_000, TransactionKind::Income),
        txn("2", date(2025, 8, 2), "Office Rent", -3_500, TransactionKind::Expense),
        txn("3", date(2025, 8, 2), "Software Subscription", -299, TransactionKind::Expense),
        txn("4", date(2025, 8, 1), "Service Revenue", 8_500, TransactionKind::Income),
        txn("5", date(2025, 8, 1), "Marketing Campaign", -1_200, TransactionKind::Expense),
    ]
}

pub fn get_mock_forecast_horizons() -> Vec<ForecastHorizon> {
    let horizon = |label: &str, delta: i64, tone: Tone| ForecastHorizon {
        label: label.to_string(),
        projected_delta: dollars(delta),
        confidence: 95,
        tone,
    };

    vec![
        horizon("Next 7 Days", 45_230, Tone::Success),
        horizon("Next 30 Days", 156_780, Tone::Success),
        horizon("Next 90 Days", 425_690, Tone::Primary),
    ]
}

pub fn get_mock_user() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        role: "Admin".to_string(),
    }
}
