#![cfg(target_arch = "wasm32")]

use price_generator_wasm::domain::history::{HistoryStore, KeyValueStore};
use price_generator_wasm::domain::pricing::{PricingEngine, PricingRule, RandomSource};
use price_generator_wasm::infrastructure::{
    BrowserLocalStorage, FixedClock, MathRandom, ScriptedRandom,
};
use price_generator_wasm::presentation::PriceGeneratorApi;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "priceHistoryTest";

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let mut storage = BrowserLocalStorage::new().unwrap();
    storage.remove(TEST_KEY).unwrap();
    assert_eq!(storage.get(TEST_KEY).unwrap(), None);

    storage.set(TEST_KEY, "[]").unwrap();
    assert_eq!(storage.get(TEST_KEY).unwrap().as_deref(), Some("[]"));
    storage.remove(TEST_KEY).unwrap();
}

#[wasm_bindgen_test]
fn history_store_persists_to_local_storage() {
    let storage = BrowserLocalStorage::new().unwrap();
    storage.remove(TEST_KEY).unwrap();

    let mut engine = PricingEngine::new(ScriptedRandom::constant(50.0), FixedClock::at_millis(0));
    let mut store = HistoryStore::with_key(storage, TEST_KEY);
    store.record(engine.generate_result(8.0).unwrap()).unwrap();

    let mut reopened = HistoryStore::with_key(BrowserLocalStorage::new().unwrap(), TEST_KEY);
    let loaded = reopened.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.latest().unwrap().applied_rule(), PricingRule::TwoAndHalf);
    assert_eq!(loaded.latest().unwrap().final_price(), 20.0);

    reopened.storage().remove(TEST_KEY).unwrap();
}

#[wasm_bindgen_test]
fn math_random_stays_in_draw_range() {
    let mut random = MathRandom;
    for _ in 0..1_000 {
        let draw = random.next_draw();
        assert!((0.0..100.0).contains(&draw));
    }
}

#[wasm_bindgen_test]
fn api_returns_results_in_persisted_layout() {
    let mut api = PriceGeneratorApi::new();
    let before = api.history_length();

    let result = api.generate_price("100").unwrap();
    let original = js_sys::Reflect::get(&result, &JsValue::from_str("originalPrice")).unwrap();
    assert_eq!(original.as_f64(), Some(100.0));
    let rule = js_sys::Reflect::get(&result, &JsValue::from_str("appliedRule")).unwrap();
    assert!(rule.as_string().is_some());

    assert_eq!(api.history_length(), (before + 1).min(50));
    assert!(api.generate_price("-1").is_err());
    assert!(api.generate_price_from_number(0.0).is_err());
}
