use gloo::utils::format::JsValueSerdeExt;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

use crate::application::{AppConfig, HeadlessView, PageCoordinator, build_browser_coordinator};
use crate::domain::{
    errors::AppError,
    logging::{LogComponent, get_logger},
    pricing::PricedResult,
};

/// WASM API for pages that render with plain JavaScript.
///
/// Results come back as objects in the persisted layout
/// (`timestamp`, `originalPrice`, `finalPrice`, `appliedRule`).
#[wasm_bindgen]
pub struct PriceGeneratorApi {
    coordinator: PageCoordinator,
}

#[wasm_bindgen]
impl PriceGeneratorApi {
    /// Open `localStorage` and load the stored history.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PriceGeneratorApi {
        let mut coordinator =
            build_browser_coordinator(&AppConfig::default(), Box::new(HeadlessView));
        coordinator.start();
        PriceGeneratorApi { coordinator }
    }

    /// Generate a price from the raw input field text.
    #[wasm_bindgen(js_name = generatePrice)]
    pub fn generate_price(&mut self, raw_input: &str) -> Result<JsValue, JsValue> {
        let result = self.coordinator.submit(raw_input).map_err(AppError::from)?;
        to_js(&result)
    }

    /// Generate a price from a number.
    #[wasm_bindgen(js_name = generatePriceFromNumber)]
    pub fn generate_price_from_number(&mut self, original_price: f64) -> Result<JsValue, JsValue> {
        let result = self
            .coordinator
            .submit_price(original_price)
            .map_err(AppError::from)?;
        to_js(&result)
    }

    /// Current history, most recent first.
    #[wasm_bindgen(js_name = history)]
    pub fn history(&self) -> Result<JsValue, JsValue> {
        JsValue::from_serde(self.coordinator.history()).map_err(|e| {
            get_logger().error(LogComponent::Presentation("WasmApi"), &e.to_string());
            JsValue::from_str(&e.to_string())
        })
    }

    #[wasm_bindgen(js_name = historyLength)]
    pub fn history_length(&self) -> usize {
        self.coordinator.history().len()
    }
}

impl Default for PriceGeneratorApi {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(result: &PricedResult) -> Result<JsValue, JsValue> {
    JsValue::from_serde(result).map_err(|e| JsValue::from_str(&e.to_string()))
}
