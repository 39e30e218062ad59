//! Domain layer: pricing rules, priced results and the bounded history.
//!
//! Nothing in here touches the DOM. Browser capabilities (randomness, clock,
//! key-value storage) are reached only through the ports declared by the
//! aggregates and implemented in `infrastructure`.

pub mod errors;
pub mod history;
pub mod logging;
pub mod pricing;
