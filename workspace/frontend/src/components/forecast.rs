mod panel;

pub use panel::ForecastPanel;
