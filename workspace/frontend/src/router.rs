use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::pages::dashboard::DashboardPage;
use crate::pages::placeholder::PlaceholderPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/transactions")]
    Transactions,
    #[at("/forecasting")]
    Forecasting,
    #[at("/accounts")]
    Accounts,
    #[at("/reports")]
    Reports,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Heading for routes that only render a placeholder page
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Cash Flow Dashboard",
            Route::Transactions => "Transactions",
            Route::Forecasting => "Forecasting",
            Route::Accounts => "Bank Accounts",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
            Route::NotFound => "404 Not Found",
        }
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    let current_path = AttrValue::from(route.to_path());

    match route {
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout {current_path}><DashboardPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout {current_path}><h1 class="text-3xl font-bold">{Route::NotFound.title()}</h1></Layout> }
        }
        other => {
            log::trace!("Rendering placeholder page for {:?}", other);
            html! { <Layout {current_path}><PlaceholderPage title={other.title()} /></Layout> }
        }
    }
}
