use leptos::*;

use crate::{
    application::PriceView,
    domain::{
        history::HistoryList,
        logging::{LogComponent, get_logger},
        pricing::PricedResult,
    },
    global_state,
};

/// Presentation Layer backed by the global Leptos signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalPriceView;

impl PriceView for SignalPriceView {
    fn display_result(&self, result: &PricedResult) {
        global_state::input_error().set(None);
        global_state::last_result().set(Some(result.clone()));
    }

    fn display_history(&self, history: &HistoryList) {
        global_state::history().set(history.clone());
    }

    fn notify_invalid_input(&self, message: &str) {
        get_logger().debug(LogComponent::Presentation("SignalView"), message);
        global_state::input_error().set(Some(message.to_string()));
        gloo::dialogs::alert(message);
    }
}
