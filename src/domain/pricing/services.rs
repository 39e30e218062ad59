use super::{
    entities::PricedResult,
    providers::{Clock, RandomSource},
    value_objects::{Price, PricingRule},
};
use crate::domain::{errors::PricingResult, logging::LogComponent};
use crate::log_debug;

/// Domain service - turns a base price into a priced result via a weighted draw.
///
/// Holds no state besides its providers; with a fixed draw and clock the
/// output is fully determined.
pub struct PricingEngine<R: RandomSource, C: Clock> {
    random: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> PricingEngine<R, C> {
    pub fn new(random: R, clock: C) -> Self {
        Self { random, clock }
    }

    /// Validate `original_price` and price it.
    pub fn generate_result(&mut self, original_price: f64) -> PricingResult<PricedResult> {
        let price = Price::new(original_price)?;
        Ok(self.generate_for(price))
    }

    /// Price an already validated base price.
    pub fn generate_for(&mut self, price: Price) -> PricedResult {
        let draw = self.random.next_draw();
        let rule = PricingRule::from_draw(draw);
        let result = PricedResult::new(self.clock.now(), price, rule);

        log_debug!(
            LogComponent::Domain("PricingEngine"),
            "draw {:.4} -> {} ({} -> {})",
            draw,
            rule,
            result.original_price(),
            result.final_price()
        );

        result
    }
}
