use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "cashflow_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// How long the simulated forecast generation takes, in milliseconds
    pub forecast_delay_ms: u32,

    /// Number of rows shown in the dashboard's recent transactions card
    pub recent_transactions_limit: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            forecast_delay_ms: 3000,
            recent_transactions_limit: 5,
        }
    }
}

fn storage_key(name: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, name)
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|name| storage.get_item(&storage_key(name)).ok().flatten());
        }

        settings
    }

    /// Apply overrides from a key lookup; unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("log_level").as_deref().and_then(parse_level) {
            self.log_level = level;
        }

        if let Some(delay) = lookup("forecast_delay_ms").and_then(|v| v.parse::<u32>().ok()) {
            self.forecast_delay_ms = delay;
        }

        if let Some(limit) = lookup("recent_transactions_limit").and_then(|v| v.parse::<usize>().ok()) {
            self.recent_transactions_limit = limit;
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.log_level, Level::Info);
        assert_eq!(settings.forecast_delay_ms, 3000);
        assert_eq!(settings.recent_transactions_limit, 5);
        assert!(!settings.debug_mode);
    }

    #[test]
    fn test_overrides_applied() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup_from(&[
            ("log_level", "TRACE"),
            ("forecast_delay_ms", "500"),
            ("recent_transactions_limit", "3"),
        ]));

        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.forecast_delay_ms, 500);
        assert_eq!(settings.recent_transactions_limit, 3);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut settings = AppSettings::default();
        settings.apply_overrides(lookup_from(&[
            ("log_level", "loud"),
            ("forecast_delay_ms", "-1"),
        ]));

        assert_eq!(settings, AppSettings::default());
    }
}
