use chrono::{TimeZone, Utc};
use price_generator_wasm::domain::history::{HISTORY_STORAGE_KEY, HistoryStore};
use price_generator_wasm::domain::pricing::PricingEngine;
use price_generator_wasm::infrastructure::{FixedClock, InMemoryStore, ScriptedRandom};

#[test]
fn persisted_history_layout() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    let mut engine = PricingEngine::new(ScriptedRandom::new([0.05, 50.0]), clock);
    let mut store = HistoryStore::new(InMemoryStore::new());

    store.record(engine.generate_result(100.0).unwrap()).unwrap();
    store.record(engine.generate_result(100.0).unwrap()).unwrap();

    let raw = store.storage().raw(HISTORY_STORAGE_KEY).unwrap();
    insta::assert_snapshot!(
        raw,
        @r#"[{"timestamp":"2024-05-01T10:00:00.000Z","originalPrice":100.0,"finalPrice":250.0,"appliedRule":"2.5x Original Price (60%)"},{"timestamp":"2024-05-01T10:00:00.000Z","originalPrice":100.0,"finalPrice":100.0,"appliedRule":"Original Price (0.1%)"}]"#
    );
}
