use chrono::Local;
use common::ForecastHorizon;
use yew::prelude::*;

use crate::common::loading::{SkeletonLine, SKELETON_CLASS};
use crate::hooks::use_forecast_generation;
use crate::mock_data::get_mock_forecast_horizons;
use crate::providers::use_services;

#[derive(Properties, PartialEq)]
pub struct ForecastPanelProps {
    #[prop_or_default]
    pub loading: bool,
}

/// Forecast card with a "generate" action backed by the [`ForecastService`](crate::providers::ForecastService)
/// from context.
#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &ForecastPanelProps) -> Html {
    let services = use_services();
    let generation = use_forecast_generation(services.forecast.clone());

    html! {
        <ForecastPanelView
            loading={props.loading}
            generating={generation.generating}
            on_generate={generation.generate.clone()}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct ForecastPanelViewProps {
    #[prop_or_default]
    pub loading: bool,
    pub generating: bool,
    pub on_generate: Callback<()>,
}

#[function_component(ForecastPanelView)]
pub fn forecast_panel_view(props: &ForecastPanelViewProps) -> Html {
    let horizons = get_mock_forecast_horizons();
    let confidence = ForecastHorizon::lowest_confidence(&horizons);

    let onclick = {
        let on_generate = props.on_generate.clone();
        let generating = props.generating;
        Callback::from(move |_: MouseEvent| {
            if generating {
                return;
            }
            log::debug!("User requested a new forecast");
            on_generate.emit(());
        })
    };

    let rows = if props.loading {
        html! {
            { for (0..horizons.len()).map(|i| html! {
                <div key={i} class={classes!("flex", "justify-between", "items-center", SKELETON_CLASS)}>
                    <SkeletonLine class={classes!("h-4", "w-24")} />
                    <SkeletonLine class={classes!("h-4", "w-20")} />
                </div>
            })}
        }
    } else {
        html! {
            { for horizons.iter().map(|horizon| html! {
                <div key={horizon.label.clone()} class="flex justify-between items-center" data-testid="forecast-horizon">
                    <span class="text-sm text-gray-600">{&horizon.label}</span>
                    <span class={classes!("font-semibold", horizon.tone.text_class())}>{horizon.display_delta()}</span>
                </div>
            })}
        }
    };

    html! {
        <div class="space-y-4" data-testid="forecast-panel">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-2">
                    <i class="fas fa-wand-magic-sparkles text-primary"></i>
                    <span class="font-medium">{"AI Forecast"}</span>
                </div>
                if let Some(confidence) = confidence {
                    <span class="badge badge-primary badge-outline text-xs">
                        {format!("{}% Confidence", confidence)}
                    </span>
                }
            </div>

            <div class="space-y-3">
                {rows}
            </div>

            <button
                class="btn btn-primary w-full"
                disabled={props.generating || props.loading}
                {onclick}
            >
                if props.generating {
                    <>
                        <span class="loading loading-spinner loading-sm"></span>
                        <span>{"Generating..."}</span>
                    </>
                } else {
                    <>
                        <i class="fas fa-chart-bar"></i>
                        <span>{"Generate New Forecast"}</span>
                    </>
                }
            </button>

            <div class="text-xs text-gray-500 text-center">
                {format!("Last updated: {}", Local::now().format("%m/%d/%Y"))}
            </div>
        </div>
    }
}
