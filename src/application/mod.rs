pub mod config;
pub mod coordinator;
pub mod presenter;
pub mod use_cases;

pub use config::*;
pub use coordinator::*;
pub use presenter::*;
pub use use_cases::*;
