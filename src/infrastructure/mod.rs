//! Browser-backed and in-memory implementations of the domain ports.

pub mod clock;
pub mod random;
pub mod services;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use random::{MathRandom, ScriptedRandom};
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use storage::{BrowserLocalStorage, InMemoryStore, open_page_storage};
