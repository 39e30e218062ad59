use leptos::*;
use once_cell::sync::OnceCell;

use crate::domain::{history::HistoryList, pricing::PricedResult};

/// Reactive page state written by `SignalPriceView` and read by the `App` view.
pub struct Globals {
    pub last_result: RwSignal<Option<PricedResult>>,
    pub history: RwSignal<HistoryList>,
    pub price_input: RwSignal<String>,
    pub input_error: RwSignal<Option<String>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        last_result: create_rw_signal(None),
        history: create_rw_signal(HistoryList::new()),
        price_input: create_rw_signal(String::new()),
        input_error: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub last_result => last_result: Option<PricedResult>,
    pub history => history: HistoryList,
    pub price_input => price_input: String,
    pub input_error => input_error: Option<String>,
}
