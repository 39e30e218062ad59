use crate::domain::{
    errors::{PricingError, PricingResult},
    history::{HistoryList, HistoryStore, KeyValueStore},
    logging::{LogComponent, LogLevel, get_logger},
    pricing::{Clock, Price, PricedResult, PricingEngine, RandomSource},
};
use crate::{log_info, log_warn};

use super::presenter::{INVALID_PRICE_MESSAGE, PriceView};

/// Use case: one page's worth of price generation.
///
/// Submission flow: parse → generate → record → display result → display history.
pub struct PriceGeneratorCoordinator<R, C, S, V>
where
    R: RandomSource,
    C: Clock,
    S: KeyValueStore,
    V: PriceView,
{
    engine: PricingEngine<R, C>,
    history: HistoryStore<S>,
    view: V,
}

impl<R, C, S, V> PriceGeneratorCoordinator<R, C, S, V>
where
    R: RandomSource,
    C: Clock,
    S: KeyValueStore,
    V: PriceView,
{
    pub fn new(engine: PricingEngine<R, C>, history: HistoryStore<S>, view: V) -> Self {
        Self {
            engine,
            history,
            view,
        }
    }

    /// Load persisted history (empty on failure) and render it once.
    pub fn start(&mut self) -> &HistoryList {
        let history = self.history.load_or_default();
        log_info!(
            LogComponent::Application("Coordinator"),
            "started with {} stored results",
            history.len()
        );
        self.view.display_history(history);
        history
    }

    /// Handle a submission of the raw input field text.
    pub fn submit(&mut self, raw_input: &str) -> PricingResult<PricedResult> {
        match Price::parse(raw_input) {
            Ok(price) => Ok(self.price(price)),
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Handle a submission that is already numeric.
    pub fn submit_price(&mut self, original_price: f64) -> PricingResult<PricedResult> {
        match Price::new(original_price) {
            Ok(price) => Ok(self.price(price)),
            Err(e) => Err(self.reject(e)),
        }
    }

    pub fn history(&self) -> &HistoryList {
        self.history.entries()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &HistoryStore<S> {
        &self.history
    }

    fn price(&mut self, price: Price) -> PricedResult {
        let result = self.engine.generate_for(price);

        // Persistence is best-effort; the result is still shown.
        if let Err(e) = self.history.record(result.clone()) {
            log_warn!(
                LogComponent::Application("Coordinator"),
                "history not persisted: {}",
                e
            );
        }

        if let Ok(json) = serde_json::to_string(&result) {
            get_logger().log_with_metadata(
                LogLevel::Info,
                LogComponent::Application("Coordinator"),
                "price generated",
                &json,
            );
        }

        self.view.display_result(&result);
        self.view.display_history(self.history.entries());
        result
    }

    fn reject(&self, error: PricingError) -> PricingError {
        log_warn!(
            LogComponent::Application("Coordinator"),
            "rejected submission: {}",
            error
        );
        self.view.notify_invalid_input(INVALID_PRICE_MESSAGE);
        error
    }
}
