use std::collections::VecDeque;

use crate::domain::pricing::{DRAW_RANGE, RandomSource};

/// `Math.random()` scaled to `[0, 100)`
#[derive(Debug, Clone, Copy, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_draw(&mut self) -> f64 {
        js_sys::Math::random() * DRAW_RANGE
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    /// An empty script behaves like `constant(0.0)`.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn constant(draw: f64) -> Self {
        Self::new([draw])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_draw(&mut self) -> f64 {
        match self.draws.pop_front() {
            Some(draw) => {
                self.draws.push_back(draw);
                draw
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draws_cycle() {
        let mut random = ScriptedRandom::new([0.05, 50.0]);
        assert_eq!(random.next_draw(), 0.05);
        assert_eq!(random.next_draw(), 50.0);
        assert_eq!(random.next_draw(), 0.05);
    }

    #[test]
    fn empty_script_draws_zero() {
        let mut random = ScriptedRandom::new(Vec::new());
        assert_eq!(random.next_draw(), 0.0);
    }
}
