use async_trait::async_trait;
use common::CashFlowPoint;

use crate::error::Result;
use crate::mock_data::get_mock_cash_flow;

/// Source of the cash flow series shown on the dashboard.
#[async_trait(?Send)]
pub trait DashboardDataProvider {
    async fn fetch_cash_flow(&self) -> Result<Vec<CashFlowPoint>>;
}

/// Serves the built-in fixture series; never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixtureDashboardProvider;

#[async_trait(?Send)]
impl DashboardDataProvider for FixtureDashboardProvider {
    async fn fetch_cash_flow(&self) -> Result<Vec<CashFlowPoint>> {
        log::debug!("Loading cash flow fixture");
        Ok(get_mock_cash_flow())
    }
}
