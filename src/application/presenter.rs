use crate::domain::{history::HistoryList, pricing::PricedResult};

/// Text shown when a submission is rejected.
pub const INVALID_PRICE_MESSAGE: &str = "Please enter a valid price";

/// Port to the Presentation Layer. The coordinator calls into it; rendering
/// itself lives in `presentation`.
pub trait PriceView {
    /// Called once per generated result.
    fn display_result(&self, result: &PricedResult);

    /// Called once per generated result and once after the startup load.
    fn display_history(&self, history: &HistoryList);

    /// Blocking notification for rejected input.
    fn notify_invalid_input(&self, message: &str);
}

impl<V: PriceView + ?Sized> PriceView for Box<V> {
    fn display_result(&self, result: &PricedResult) {
        (**self).display_result(result)
    }

    fn display_history(&self, history: &HistoryList) {
        (**self).display_history(history)
    }

    fn notify_invalid_input(&self, message: &str) {
        (**self).notify_invalid_input(message)
    }
}

impl<V: PriceView + ?Sized> PriceView for std::rc::Rc<V> {
    fn display_result(&self, result: &PricedResult) {
        (**self).display_result(result)
    }

    fn display_history(&self, history: &HistoryList) {
        (**self).display_history(history)
    }

    fn notify_invalid_input(&self, message: &str) {
        (**self).notify_invalid_input(message)
    }
}

/// View that renders nothing; used by the JS-facing API, which returns
/// results to its caller instead of drawing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessView;

impl PriceView for HeadlessView {
    fn display_result(&self, _result: &PricedResult) {}

    fn display_history(&self, _history: &HistoryList) {}

    fn notify_invalid_input(&self, _message: &str) {}
}
