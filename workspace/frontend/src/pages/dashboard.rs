use yew::prelude::*;

use crate::components::charts::CashFlowChart;
use crate::components::dashboard::MetricsCards;
use crate::components::forecast::ForecastPanel;
use crate::components::transactions::TransactionList;
use crate::hooks::{use_dashboard_data, DashboardData};
use crate::providers::use_services;
use crate::settings;

pub const PAGE_TITLE: &str = "Cash Flow Dashboard - Forecasting Tool";

/// Owns the dashboard dataset and loading flag; widgets only get props.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let services = use_services();
    let data = use_dashboard_data(services.dashboard.clone());
    let limit = settings::get_settings().recent_transactions_limit;

    use_effect_with((), |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(PAGE_TITLE);
        }
        || ()
    });

    html! { <DashboardView data={(*data).clone()} {limit} /> }
}

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub data: DashboardData,
    pub limit: usize,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let loading = props.data.loading;

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{"Cash Flow Dashboard"}</h1>
                <p class="text-gray-600">{"Monitor and forecast your organization's cash flow"}</p>
            </div>

            <MetricsCards {loading} />

            <div class="card bg-base-100 shadow p-6">
                <h2 class="text-xl font-semibold mb-4">{"Cash Flow Trends"}</h2>
                <CashFlowChart data={props.data.cash_flow.clone()} {loading} />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">{"Recent Transactions"}</h2>
                    <TransactionList limit={props.limit} {loading} />
                </div>

                <div class="card bg-base-100 shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">{"AI Forecast"}</h2>
                    <ForecastPanel {loading} />
                </div>
            </div>
        </div>
    }
}
