use std::cell::RefCell;

use super::{config::AppConfig, presenter::PriceView, use_cases::PriceGeneratorCoordinator};
use crate::domain::{
    history::{HistoryStore, KeyValueStore},
    logging::{LogComponent, get_logger},
    pricing::{Clock, PricingEngine, RandomSource},
};
use crate::infrastructure::{MathRandom, SystemClock, open_page_storage};

/// Coordinator wired with type-erased providers, as the page uses it.
pub type PageCoordinator = PriceGeneratorCoordinator<
    Box<dyn RandomSource>,
    Box<dyn Clock>,
    Box<dyn KeyValueStore>,
    Box<dyn PriceView>,
>;

/// Build a coordinator from explicit parts.
pub fn build_coordinator(
    config: &AppConfig,
    random: Box<dyn RandomSource>,
    clock: Box<dyn Clock>,
    storage: Box<dyn KeyValueStore>,
    view: Box<dyn PriceView>,
) -> PageCoordinator {
    PriceGeneratorCoordinator::new(
        PricingEngine::new(random, clock),
        HistoryStore::with_key(storage, config.storage_key.clone()),
        view,
    )
}

/// Build a coordinator backed by the browser: `Math.random`, the system
/// clock and `localStorage` (in-memory when unavailable).
pub fn build_browser_coordinator(config: &AppConfig, view: Box<dyn PriceView>) -> PageCoordinator {
    build_coordinator(
        config,
        Box::new(MathRandom),
        Box::new(SystemClock),
        open_page_storage(),
        view,
    )
}

// Single-threaded page: one coordinator per wasm instance.
thread_local! {
    static GLOBAL_COORDINATOR: RefCell<Option<PageCoordinator>> = const { RefCell::new(None) };
}

/// Install `coordinator`, run its startup load, and replace any previous one.
pub fn initialize_global_coordinator(mut coordinator: PageCoordinator) {
    coordinator.start();
    GLOBAL_COORDINATOR.with(|global| {
        *global.borrow_mut() = Some(coordinator);
    });
    get_logger().info(
        LogComponent::Application("Coordinator"),
        "global coordinator installed",
    );
}

pub fn with_global_coordinator<F, T>(f: F) -> Option<T>
where
    F: FnOnce(&PageCoordinator) -> T,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow().as_ref().map(f))
}

pub fn with_global_coordinator_mut<F, T>(f: F) -> Option<T>
where
    F: FnOnce(&mut PageCoordinator) -> T,
{
    GLOBAL_COORDINATOR.with(|global| global.borrow_mut().as_mut().map(f))
}
