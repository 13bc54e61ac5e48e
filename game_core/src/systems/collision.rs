use crate::{Ball, Body, Config, Events, Paddle, SetLength};
use hecs::World;

/// Bounce the ball off the top and bottom walls
///
/// The ball is placed back on the wall and its vertical velocity forced to
/// point into the court, so it cannot tunnel or stick.
pub fn check_wall_bounce(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let half_height = ball.body.half_height();
        if ball.body.top() < 0.0 {
            ball.body.pos.y = half_height;
            ball.vel.y = ball.vel.y.abs();
            events.ball_hit_wall = true;
        } else if ball.body.bottom() > config.court_height {
            ball.body.pos.y = config.court_height - half_height;
            ball.vel.y = -ball.vel.y.abs();
            events.ball_hit_wall = true;
        }
    }
}

/// Check ball collisions with both paddles
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle bodies without holding a borrow on the world
    let paddles: Vec<Body> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| p.body)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if ball.body.overlaps(paddle) {
                bounce_off_paddle(ball, paddle, config);
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reflect the ball off `paddle`
///
/// The ball leaves on the side it came from. Its vertical speed depends on
/// where it struck (centre hits go flat, edge hits go steep) and the whole
/// velocity is sped up by `ball_speed_increase`.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Body, config: &Config) {
    let speed = ball.vel.length();

    // Push ball out of paddle
    if ball.vel.x < 0.0 {
        ball.body.pos.x = paddle.right() + ball.body.half_width();
    } else {
        ball.body.pos.x = paddle.left() - ball.body.half_width();
    }

    // Relative position from -1 (top) to 1 (bottom)
    let hit_offset = (ball.body.pos.y - paddle.pos.y) / paddle.half_height();

    ball.vel.x = -ball.vel.x;
    ball.vel.y = hit_offset * speed * config.ball_spin;
    ball.vel.set_length(speed * config.ball_speed_increase);
}
