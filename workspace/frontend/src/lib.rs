use yew::prelude::*;
use yew_router::prelude::*;

mod common;
mod components;
mod mock_data;
mod pages;
pub mod error;
pub mod hooks;
pub mod providers;
pub mod router;
pub mod settings;

#[cfg(test)]
mod test_utils;

use providers::{Services, ServicesProvider};
use router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| Services::from_settings(&settings::get_settings()));

    html! {
        <ServicesProvider services={(*services).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ServicesProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Cash Flow Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
