/// AI tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    pub label: &'static str,
    /// Vertical speed of the AI paddle, units per second
    pub ai_speed: f32,
    /// Fraction of the paddle half-height inside which the AI holds still
    pub ai_deadzone: f32,
}

/// Ordered difficulty table, cycled by the player
pub const DIFFICULTIES: [DifficultyProfile; 3] = [
    DifficultyProfile {
        label: "Easy",
        ai_speed: 200.0,
        ai_deadzone: 0.8,
    },
    DifficultyProfile {
        label: "Normal",
        ai_speed: 300.0,
        ai_deadzone: 0.6,
    },
    DifficultyProfile {
        label: "Hard",
        ai_speed: 420.0,
        ai_deadzone: 0.3,
    },
];

pub const DEFAULT_DIFFICULTY: usize = 1;

/// Cursor into `DIFFICULTIES`; always in range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    index: usize,
}

impl Difficulty {
    pub fn new(index: usize) -> Self {
        Self {
            index: index % DIFFICULTIES.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn profile(&self) -> &'static DifficultyProfile {
        &DIFFICULTIES[self.index]
    }

    /// Advance to the next level, wrapping after the last
    pub fn cycle(&mut self) {
        self.index = (self.index + 1) % DIFFICULTIES.len();
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}
