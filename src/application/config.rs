use crate::domain::{history::HISTORY_STORAGE_KEY, logging::LogLevel};

/// Page-level settings. Pricing weights and the history cap are constants.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LogLevel,
}

impl AppConfig {
    pub fn development() -> Self {
        Self {
            storage_key: HISTORY_STORAGE_KEY.to_string(),
            log_level: LogLevel::Debug,
        }
    }

    pub fn production() -> Self {
        Self {
            storage_key: HISTORY_STORAGE_KEY.to_string(),
            log_level: LogLevel::Info,
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }
}
