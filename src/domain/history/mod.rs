//! History aggregate: the bounded result list, its storage port and the
//! store that keeps both in step.

pub mod entities;
pub mod repositories;
pub mod services;

pub use entities::*;
pub use repositories::*;
pub use services::*;
