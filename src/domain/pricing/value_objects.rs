use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::errors::{PricingError, PricingResult};

/// Upper bound (exclusive) of a pricing draw; draws live in `[0, DRAW_RANGE)`.
pub const DRAW_RANGE: f64 = 100.0;
/// Draws below this keep the original price.
pub const ORIGINAL_PRICE_BOUND: f64 = 0.1;
/// Draws below this (and at or above `ORIGINAL_PRICE_BOUND`) apply 1.5x.
pub const ONE_AND_HALF_BOUND: f64 = 40.0;
/// Largest multiplier any rule applies.
pub const MAX_MULTIPLIER: f64 = 2.5;

/// Value Object - strictly positive, finite base price
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Into, Display, Serialize)]
#[display(fmt = "{:.2}", _0)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> PricingResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "price must be a finite number greater than zero, got {}",
                value
            )));
        }
        // Every final price must stay finite, or it persists as `null`.
        if !(value * MAX_MULTIPLIER).is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "price {} is too large to price",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Parse user-entered text. Empty, non-numeric, zero and negative values are rejected.
    pub fn parse(raw: &str) -> PricingResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PricingError::InvalidInput("price is missing".to_string()));
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| PricingError::InvalidInput(format!("'{}' is not a number", trimmed)))?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = PricingError;

    fn try_from(value: f64) -> PricingResult<Self> {
        Self::new(value)
    }
}

/// Value Object - the multiplier branch that fired for a draw.
///
/// The label is both the display text and the persisted `appliedRule` value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    AsRefStr,
    StrumDisplay,
    Serialize,
    Deserialize,
)]
pub enum PricingRule {
    #[strum(serialize = "Original Price (0.1%)")]
    #[serde(rename = "Original Price (0.1%)")]
    Original,
    #[strum(serialize = "1.5x Original Price (39.9%)")]
    #[serde(rename = "1.5x Original Price (39.9%)")]
    OneAndHalf,
    #[strum(serialize = "2.5x Original Price (60%)")]
    #[serde(rename = "2.5x Original Price (60%)")]
    TwoAndHalf,
}

impl PricingRule {
    /// Select the rule for a draw in `[0, 100)`.
    ///
    /// Intervals are half-open: `[0, 0.1)`, `[0.1, 40)`, `[40, 100)`.
    /// Out-of-range draws fall through the same comparisons, so NaN lands on
    /// `TwoAndHalf`.
    pub fn from_draw(draw: f64) -> Self {
        if draw < ORIGINAL_PRICE_BOUND {
            PricingRule::Original
        } else if draw < ONE_AND_HALF_BOUND {
            PricingRule::OneAndHalf
        } else {
            PricingRule::TwoAndHalf
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            PricingRule::Original => 1.0,
            PricingRule::OneAndHalf => 1.5,
            PricingRule::TwoAndHalf => MAX_MULTIPLIER,
        }
    }

    pub fn label(&self) -> &str {
        self.as_ref()
    }

    /// Share of the draw range this rule covers, in percent.
    pub fn probability_percent(&self) -> f64 {
        match self {
            PricingRule::Original => ORIGINAL_PRICE_BOUND,
            PricingRule::OneAndHalf => ONE_AND_HALF_BOUND - ORIGINAL_PRICE_BOUND,
            PricingRule::TwoAndHalf => DRAW_RANGE - ONE_AND_HALF_BOUND,
        }
    }

    pub fn apply(&self, price: Price) -> f64 {
        price.value() * self.multiplier()
    }
}
