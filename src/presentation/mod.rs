//! Presentation layer: the Leptos page view and the JavaScript-facing API.

#[cfg(not(feature = "logic-only"))]
pub mod signal_view;
pub mod wasm_api;

#[cfg(not(feature = "logic-only"))]
pub use signal_view::SignalPriceView;
pub use wasm_api::PriceGeneratorApi;
