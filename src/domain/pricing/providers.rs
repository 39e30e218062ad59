use chrono::{DateTime, Utc};

/// Source of pricing draws.
///
/// Implementations return a uniform value in `[0, 100)`.
pub trait RandomSource {
    fn next_draw(&mut self) -> f64;
}

/// Source of the generation time stamped on each result
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_draw(&mut self) -> f64 {
        (**self).next_draw()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
