use common::{Metric, Trend};
use yew::prelude::*;

use crate::common::loading::{SkeletonLine, SKELETON_CLASS};
use crate::mock_data::get_mock_metrics;

const CARD_COUNT: usize = 4;
const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6";

#[derive(Properties, PartialEq)]
pub struct MetricsCardsProps {
    pub loading: bool,
}

#[function_component(MetricsCards)]
pub fn metrics_cards(props: &MetricsCardsProps) -> Html {
    if props.loading {
        return html! {
            <div class={GRID_CLASS}>
                { for (0..CARD_COUNT).map(|i| html! {
                    <div key={i} class={classes!("card", "bg-base-100", "shadow", "p-6", SKELETON_CLASS)}>
                        <SkeletonLine class={classes!("h-4", "w-3/4", "mb-2")} />
                        <SkeletonLine class={classes!("h-8", "w-1/2", "mb-2")} />
                        <SkeletonLine class={classes!("h-4", "w-1/4")} />
                    </div>
                })}
            </div>
        };
    }

    let metrics = get_mock_metrics();

    html! {
        <div class={GRID_CLASS} data-testid="metrics-cards">
            { for metrics.iter().enumerate().map(|(i, metric)| html! {
                <MetricCard key={i} metric={metric.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MetricCardProps {
    metric: Metric,
}

#[function_component(MetricCard)]
fn metric_card(props: &MetricCardProps) -> Html {
    let metric = &props.metric;
    let arrow = match metric.trend {
        Trend::Up => "fas fa-arrow-up",
        Trend::Down => "fas fa-arrow-down",
    };

    html! {
        <div class="card bg-base-100 shadow p-6" data-testid="metric-card">
            <p class="text-sm text-gray-600">{&metric.title}</p>
            <p class="text-2xl font-bold text-gray-900">{&metric.value}</p>
            <div class={classes!("flex", "items-center", "mt-2", metric.tone.text_class())}>
                <i class={classes!(arrow, "w-4", "mr-1")}></i>
                <span class="text-sm font-medium">{&metric.change}</span>
            </div>
        </div>
    }
}
