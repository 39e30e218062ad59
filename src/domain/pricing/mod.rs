//! Pricing aggregate: value objects, the priced result entity, the
//! weighted-draw engine and the ports it draws randomness and time from.

pub mod entities;
pub mod providers;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use providers::*;
pub use services::*;
pub use value_objects::*;
