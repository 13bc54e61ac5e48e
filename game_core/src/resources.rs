use serde::{Deserialize, Serialize};

use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Accept a frame delta only if it lies in `(0, max_dt]`
    pub fn sanitize(dt: f32, max_dt: f32) -> Option<f32> {
        if dt.is_finite() && dt > 0.0 && dt <= max_dt {
            Some(dt)
        } else {
            None
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seeded from the OS (or `crypto.getRandomValues` in the browser)
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last tick
///
/// Informational only: audio and drawing read these after `update`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub scored: Option<Side>,
    pub match_won: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Latest-value input slots written by the input adapters between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Absolute paddle Y from pointer or touch; last write wins
    pub target_y: Option<f32>,
    /// Accumulated keyboard movement since the last applied tick
    pub nudge: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target_y(&mut self, y: f32) {
        if y.is_finite() {
            self.target_y = Some(y);
        }
    }

    pub fn push_nudge(&mut self, delta: f32) {
        if delta.is_finite() {
            self.nudge += delta;
        }
    }

    /// Hand the pending input to the tick and empty the slots
    pub fn take(&mut self) -> InputState {
        std::mem::take(self)
    }
}

/// Persistent win/loss tally of the human player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, winner: Side) {
        if winner.is_human() {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}
