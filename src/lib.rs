use wasm_bindgen::prelude::*;

use crate::application::AppConfig;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;

#[cfg(not(feature = "logic-only"))]
pub mod app;
#[cfg(not(feature = "logic-only"))]
pub mod global_state;

/// Install panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    let console_logger = Box::new(infrastructure::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().log_with_metadata(
        LogLevel::Info,
        LogComponent::Presentation("Initialize"),
        "🚀 Price generator initialized",
        &format!("storage_key={}", config.storage_key),
    );
}

/// Build the page coordinator, load stored history and mount the Leptos page on `<body>`.
#[cfg(not(feature = "logic-only"))]
#[wasm_bindgen(js_name = mountApp)]
pub fn mount_app() {
    let coordinator = application::build_browser_coordinator(
        &AppConfig::default(),
        Box::new(presentation::SignalPriceView),
    );
    application::initialize_global_coordinator(coordinator);

    use crate::app::App;
    use leptos::view;
    leptos::mount_to_body(|| view! { <App /> });
}
