use std::rc::Rc;

use common::CashFlowPoint;
use yew::prelude::*;

use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct CashFlowChartProps {
    pub data: Rc<Vec<CashFlowPoint>>,
    pub loading: bool,
}

/// Placeholder for the cash flow trend chart.
///
/// Only reports how many points it was given; plotting is left to a
/// charting integration.
#[function_component(CashFlowChart)]
pub fn cash_flow_chart(props: &CashFlowChartProps) -> Html {
    if props.loading {
        return html! {
            <div class="h-64 flex items-center justify-center" data-testid="cash-flow-chart">
                <Loading />
            </div>
        };
    }

    html! {
        <div class="h-64 flex items-center justify-center bg-base-200 rounded-lg" data-testid="cash-flow-chart">
            <div class="text-center">
                <p class="text-gray-600 mb-2">{"Cash Flow Chart"}</p>
                <p class="text-sm text-gray-500">{"Chart integration coming soon"}</p>
                <div class="mt-4 text-xs text-gray-400">
                    {format!("Data Points: {}", props.data.len())}
                </div>
            </div>
        </div>
    }
}
