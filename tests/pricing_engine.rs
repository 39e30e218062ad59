use chrono::{TimeZone, Utc};
use price_generator_wasm::domain::errors::PricingError;
use price_generator_wasm::domain::pricing::{PricingEngine, PricingRule};
use price_generator_wasm::infrastructure::{FixedClock, ScriptedRandom};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn engine(draw: f64) -> PricingEngine<ScriptedRandom, FixedClock> {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    PricingEngine::new(ScriptedRandom::constant(draw), clock)
}

#[test]
fn tiny_draw_keeps_original_price() {
    let result = engine(0.05).generate_result(100.0).unwrap();
    assert_eq!(result.original_price(), 100.0);
    assert_eq!(result.final_price(), 100.0);
    assert_eq!(result.applied_rule().label(), "Original Price (0.1%)");
    assert_eq!(
        result.timestamp(),
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    );
}

#[test]
fn upper_draw_applies_two_and_a_half() {
    let result = engine(50.0).generate_result(100.0).unwrap();
    assert_eq!(result.original_price(), 100.0);
    assert_eq!(result.final_price(), 250.0);
    assert_eq!(result.applied_rule().label(), "2.5x Original Price (60%)");
}

#[test]
fn draw_at_lower_bound_selects_one_and_a_half() {
    let result = engine(0.1).generate_result(100.0).unwrap();
    assert_eq!(result.applied_rule(), PricingRule::OneAndHalf);
    assert_eq!(result.final_price(), 150.0);
    assert_eq!(result.applied_rule().label(), "1.5x Original Price (39.9%)");
}

#[test]
fn draw_at_forty_selects_two_and_a_half() {
    let result = engine(40.0).generate_result(100.0).unwrap();
    assert_eq!(result.applied_rule(), PricingRule::TwoAndHalf);
    assert_eq!(result.final_price(), 250.0);
}

#[test]
fn invalid_prices_are_rejected() {
    for price in [0.0, -0.01, -100.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = engine(50.0).generate_result(price).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)), "price {price}");
    }
}

#[test]
fn prices_whose_final_price_would_overflow_are_rejected() {
    for price in [1e308, f64::MAX, f64::MAX / 2.0] {
        let err = engine(50.0).generate_result(price).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)), "price {price}");
    }

    let result = engine(50.0).generate_result(1e307).unwrap();
    assert!(result.final_price().is_finite());
    assert!(result.is_consistent());
}

#[test]
fn successive_results_follow_the_scripted_draws() {
    let clock = FixedClock::at_millis(0);
    let mut engine = PricingEngine::new(ScriptedRandom::new([0.0, 39.99, 99.99]), clock);
    let rules: Vec<_> = (0..3)
        .map(|_| engine.generate_result(10.0).unwrap().applied_rule())
        .collect();
    assert_eq!(
        rules,
        vec![PricingRule::Original, PricingRule::OneAndHalf, PricingRule::TwoAndHalf]
    );
}

#[quickcheck]
fn final_price_is_one_of_three_multiples(price: f64, draw: f64) -> TestResult {
    let price = price.abs();
    if !(price * 2.5).is_finite() || price == 0.0 || !draw.is_finite() {
        return TestResult::discard();
    }
    let draw = draw.abs() % 100.0;

    let result = engine(draw).generate_result(price).unwrap();
    let final_price = result.final_price();
    TestResult::from_bool(
        result.is_consistent()
            && (final_price == price || final_price == price * 1.5 || final_price == price * 2.5),
    )
}

#[quickcheck]
fn non_positive_prices_always_fail(price: f64) -> bool {
    let price = -price.abs();
    engine(50.0).generate_result(price).is_err()
}
