//! Browser client for Pong
//!
//! Wraps `game_core::Game` behind a wasm-bindgen facade. The JS side owns the
//! canvas, audio and `requestAnimationFrame`; every frame it forwards input,
//! calls `frame(dt)` and reads the getters back to draw.

pub mod input;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
pub mod storage;

use game_core::{Config, Game, GameRng, MatchState, Side, StatsStore};
use input::{command_for_key, handle_key_down, handle_key_up, pointer_to_court_y, KeyCommand};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

fn build_game(store: Box<dyn StatsStore>, rng: GameRng, seed: u64) -> Game {
    match Game::with_config(Config::new(), store, rng) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Falling back to in-memory game: {}", e);
            Game::new(seed)
        }
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct WasmGame {
    game: Game,
    held_dir: i8,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl WasmGame {
    /// Game with stats kept in `localStorage`
    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        logger::init(log::LevelFilter::Info);
        let store = Box::new(storage::LocalStorageStats::default());
        Self {
            game: build_game(store, GameRng::from_entropy(), 0),
            held_dir: 0,
        }
    }

    /// Deterministic game with in-memory stats
    pub fn with_seed(seed: u32) -> Self {
        let store = Box::new(game_core::MemoryStats::new());
        Self {
            game: build_game(store, GameRng::new(seed as u64), seed as u64),
            held_dir: 0,
        }
    }

    pub fn key_down(&mut self, key: &str) {
        match command_for_key(key) {
            Some(KeyCommand::Confirm) => {
                self.game.confirm_action();
            }
            Some(KeyCommand::Cancel) => {
                self.game.cancel_action();
            }
            Some(KeyCommand::CycleDifficulty) => {
                if matches!(self.game.state(), MatchState::Menu | MatchState::GameOver) {
                    self.game.cycle_difficulty();
                }
            }
            None => self.held_dir = handle_key_down(key, self.held_dir),
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held_dir = handle_key_up(key, self.held_dir);
    }

    /// Pointer or touch position relative to the canvas
    pub fn pointer_move(&mut self, offset_y: f32, element_height: f32) {
        let court_height = self.game.config().court_height;
        if let Some(y) = pointer_to_court_y(offset_y, element_height, court_height) {
            self.game.set_human_paddle_y(y);
        }
    }

    pub fn click(&mut self) {
        self.game.confirm_action();
    }

    /// One animation frame, `dt` in seconds
    pub fn frame(&mut self, dt: f32) {
        if self.held_dir != 0 {
            self.game.nudge_human_paddle(self.held_dir, dt);
        }
        self.game.update(dt);
    }

    pub fn state_string(&self) -> String {
        format!("{:?}", self.game.state())
    }

    pub fn court_width(&self) -> f32 {
        self.game.config().court_width
    }

    pub fn court_height(&self) -> f32 {
        self.game.config().court_height
    }

    pub fn ball_x(&self) -> f32 {
        self.game.ball().body.pos.x
    }

    pub fn ball_y(&self) -> f32 {
        self.game.ball().body.pos.y
    }

    pub fn ball_size(&self) -> f32 {
        self.game.ball().body.size().x
    }

    /// 0 for the human paddle, anything else for the computer
    pub fn paddle_y(&self, index: u32) -> f32 {
        let side = if index == 0 { Side::Left } else { Side::Right };
        self.game.paddle(side).body.pos.y
    }

    pub fn score_left(&self) -> u32 {
        self.game.scores().0
    }

    pub fn score_right(&self) -> u32 {
        self.game.scores().1
    }

    pub fn score_pause_timer(&self) -> f32 {
        self.game.score_pause_timer()
    }

    pub fn difficulty_label(&self) -> String {
        self.game.difficulty().label.to_string()
    }

    pub fn wins(&self) -> u32 {
        self.game.stats().wins
    }

    pub fn losses(&self) -> u32 {
        self.game.stats().losses
    }

    /// -1 while nobody has won, otherwise 0 (human) or 1 (computer)
    pub fn winner(&self) -> i32 {
        self.game.winner().map_or(-1, |side| side.index() as i32)
    }

    pub fn wall_hit(&self) -> bool {
        self.game.events().ball_hit_wall
    }

    pub fn paddle_hit(&self) -> bool {
        self.game.events().ball_hit_paddle
    }

    pub fn scored(&self) -> bool {
        self.game.events().scored.is_some()
    }

    pub fn match_won(&self) -> bool {
        self.game.events().match_won.is_some()
    }

    /// Flattened `[x, y, size, alpha, color]` per spark
    pub fn particles(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for (particle, fraction) in self.game.particles() {
            let color = match particle.color {
                game_core::SparkColor::Wall => 0.0,
                game_core::SparkColor::Paddle => 1.0,
                game_core::SparkColor::Score => 2.0,
            };
            out.extend_from_slice(&[particle.pos.x, particle.pos.y, particle.size, fraction, color]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_keys_drive_the_match() {
        let mut client = WasmGame::with_seed(1);
        assert_eq!(client.state_string(), "Menu");

        client.key_down("Enter");
        assert_eq!(client.state_string(), "Playing");

        client.key_down("Escape");
        assert_eq!(client.state_string(), "Paused");
        client.key_down("Escape");
        assert_eq!(client.state_string(), "Playing");
    }

    #[test]
    fn test_held_key_moves_paddle() {
        let mut client = WasmGame::with_seed(2);
        client.click();
        let start = client.paddle_y(0);

        client.key_down("ArrowUp");
        for _ in 0..10 {
            client.frame(DT);
        }
        assert!(client.paddle_y(0) < start);

        client.key_up("ArrowUp");
        let stopped = client.paddle_y(0);
        client.frame(DT);
        assert_eq!(client.paddle_y(0), stopped);
    }

    #[test]
    fn test_pointer_sets_paddle() {
        let mut client = WasmGame::with_seed(3);
        client.click();
        // Canvas drawn at half size
        client.pointer_move(50.0, 200.0);
        client.frame(DT);
        assert!((client.paddle_y(0) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_difficulty_only_cycles_between_matches() {
        let mut client = WasmGame::with_seed(4);
        assert_eq!(client.difficulty_label(), "Normal");
        client.key_down("d");
        assert_eq!(client.difficulty_label(), "Hard");

        client.click();
        client.key_down("d");
        assert_eq!(client.difficulty_label(), "Hard");
    }

    #[test]
    fn test_initial_readouts() {
        let client = WasmGame::with_seed(5);
        assert_eq!(client.court_width(), 800.0);
        assert_eq!(client.court_height(), 400.0);
        assert_eq!((client.ball_x(), client.ball_y()), (400.0, 200.0));
        assert_eq!(client.winner(), -1);
        assert_eq!((client.wins(), client.losses()), (0, 0));
        assert!(client.particles().is_empty());
    }
}
