//! Seams between the dashboard and whatever produces its data.
//!
//! Both collaborators are trait objects shared through [`Services`], so a
//! page can be pointed at a real backend without touching its widgets.

pub mod dashboard;
pub mod forecast;

use std::rc::Rc;

use yew::prelude::*;

pub use dashboard::{DashboardDataProvider, FixtureDashboardProvider};
pub use forecast::{ForecastService, GenerationTask, SimulatedForecastService};

use crate::settings::AppSettings;

/// Collaborators handed to the component tree through a context.
#[derive(Clone)]
pub struct Services {
    pub dashboard: Rc<dyn DashboardDataProvider>,
    pub forecast: Rc<dyn ForecastService>,
}

impl Services {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            dashboard: Rc::new(FixtureDashboardProvider),
            forecast: Rc::new(SimulatedForecastService::new(settings.forecast_delay_ms)),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dashboard, &other.dashboard) && Rc::ptr_eq(&self.forecast, &other.forecast)
    }
}

/// Services from the nearest provider, or the fixture-backed defaults.
#[hook]
pub fn use_services() -> Services {
    let fallback = use_memo((), |_| Services::default());
    use_context::<Services>().unwrap_or_else(|| (*fallback).clone())
}

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub services: Services,
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    html! {
        <ContextProvider<Services> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<Services>>
    }
}
