pub mod components;
pub mod config;
pub mod difficulty;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod stats;
pub mod systems;
pub mod vector;

pub use components::*;
pub use config::*;
pub use difficulty::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use stats::{FileStats, MemoryStats, StatsError, StatsStore};
pub use vector::*;

use glam::Vec2;
use hecs::World;

/// Helper to create a paddle entity at its serving position
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let mut paddle = Paddle::new(side, config.paddle_width, config.paddle_height);
    paddle.body.pos = Vec2::new(config.paddle_x(side), config.court_height / 2.0);
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> hecs::Entity {
    let mut ball = Ball::new(config.ball_size);
    ball.body.pos = pos;
    ball.vel = vel;
    world.spawn((ball,))
}

/// Copy of the ball, if one exists
pub fn ball_snapshot(world: &World) -> Option<Ball> {
    world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball)
}

/// Copy of the paddle on `side`, if one exists
pub fn paddle_snapshot(world: &World, side: Side) -> Option<Paddle> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| *p)
}
