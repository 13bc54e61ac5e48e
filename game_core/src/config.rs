use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Game configuration
///
/// Every field falls back to its `Params` default when missing from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub keyboard_paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increase: f32,
    pub ball_spin: f32,
    pub launch_max_angle: f32,
    pub win_score: u32,
    pub score_pause: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            keyboard_paddle_speed: Params::KEYBOARD_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_spin: Params::BALL_SPIN,
            launch_max_angle: Params::LAUNCH_MAX_ANGLE,
            win_score: Params::WIN_SCORE,
            score_pause: Params::SCORE_PAUSE,
            max_dt: Params::MAX_DT,
        }
    }
}

/// Rejected configuration
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(what) => write!(f, "invalid config: {}", what),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON tuning file; absent keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            (self.court_width, "court_width must be positive"),
            (self.court_height, "court_height must be positive"),
            (self.paddle_width, "paddle_width must be positive"),
            (self.paddle_height, "paddle_height must be positive"),
            (self.ball_size, "ball_size must be positive"),
            (self.ball_speed_initial, "ball_speed_initial must be positive"),
            (self.ball_speed_increase, "ball_speed_increase must be positive"),
            (self.max_dt, "max_dt must be positive"),
        ];
        for (value, what) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(what));
            }
        }
        if self.paddle_height > self.court_height {
            return Err(ConfigError::Invalid("paddle_height exceeds court_height"));
        }
        if self.ball_size > self.court_height {
            return Err(ConfigError::Invalid("ball_size exceeds court_height"));
        }
        if !(self.paddle_margin.is_finite() && self.paddle_margin >= 0.0) {
            return Err(ConfigError::Invalid("paddle_margin must be finite and not negative"));
        }
        if !self.ball_spin.is_finite() {
            return Err(ConfigError::Invalid("ball_spin must be finite"));
        }
        if !(0.0..std::f32::consts::FRAC_PI_2).contains(&self.launch_max_angle) {
            return Err(ConfigError::Invalid("launch_max_angle must be in [0, pi/2)"));
        }
        if self.score_pause < 0.0 || self.keyboard_paddle_speed < 0.0 {
            return Err(ConfigError::Invalid("durations and speeds must not be negative"));
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid("win_score must be at least 1"));
        }
        Ok(())
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Left => self.paddle_margin,
            crate::Side::Right => self.court_width - self.paddle_margin,
        }
    }

    /// Clamp paddle Y to court bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.court_height - half_height)
    }

    pub fn court_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }
}
