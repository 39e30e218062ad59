use derive_more::{Display, From};
use wasm_bindgen::JsValue;

/// Pricing failures. The only one is bad user input.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum PricingError {
    #[display(fmt = "Invalid input: {}", _0)]
    InvalidInput(String),
}

impl std::error::Error for PricingError {}

/// Failures of the underlying key-value storage.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum StorageError {
    #[display(fmt = "Storage unavailable: {}", _0)]
    Unavailable(String),
    #[display(fmt = "Storage read failed: {}", _0)]
    Read(String),
    #[display(fmt = "Storage write failed: {}", _0)]
    Write(String),
}

impl std::error::Error for StorageError {}

/// History persistence failures.
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum HistoryError {
    /// Stored value is not an array of priced results
    #[display(fmt = "Corrupt history: {}", _0)]
    #[from(ignore)]
    Corrupt(String),
    #[display(fmt = "History storage error: {}", _0)]
    Storage(StorageError),
}

impl std::error::Error for HistoryError {}

/// Root error type for the entire application
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum AppError {
    #[display(fmt = "Pricing Error: {}", _0)]
    Pricing(PricingError),
    #[display(fmt = "History Error: {}", _0)]
    History(HistoryError),
}

impl std::error::Error for AppError {}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::History(HistoryError::Storage(error))
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
pub type HistoryResult<T> = Result<T, HistoryError>;
