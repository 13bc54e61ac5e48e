use crate::{ball_snapshot, DifficultyProfile, Paddle, Side, Time};
use hecs::World;

/// Move the computer paddle toward the ball
///
/// The AI only reacts while the ball travels toward it, and holds still while
/// the ball is inside its deadzone. Clamping is left to `clamp_paddles`.
pub fn update_ai(world: &mut World, time: &Time, profile: &DifficultyProfile) {
    let Some(ball) = ball_snapshot(world) else {
        return;
    };
    if ball.vel.x <= 0.0 {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }
        let diff = ball.body.pos.y - paddle.body.pos.y;
        if diff.abs() > profile.ai_deadzone * paddle.body.half_height() {
            paddle.body.pos.y += diff.signum() * profile.ai_speed * time.dt;
        }
    }
}
