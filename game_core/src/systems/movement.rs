use crate::{Ball, Config, Paddle, Time};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.body.pos += ball.vel * time.dt;
    }
}

/// Keep both paddles fully inside the court
pub fn clamp_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let half_height = paddle.body.half_height();
        paddle.body.pos.y = paddle
            .body
            .pos
            .y
            .clamp(half_height, config.court_height - half_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ball_snapshot, create_ball, create_paddle, paddle_snapshot, Side};
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_velocity_times_dt() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(
            &mut world,
            &config,
            Vec2::new(100.0, 100.0),
            Vec2::new(200.0, -100.0),
        );

        move_ball(&mut world, &Time::new(0.016, 0.0));

        let ball = ball_snapshot(&world).unwrap();
        assert!((ball.body.pos.x - 103.2).abs() < 1e-4);
        assert!((ball.body.pos.y - 98.4).abs() < 1e-4);
    }

    #[test]
    fn test_clamp_paddles() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.body.pos.y = match paddle.side {
                Side::Left => -300.0,
                Side::Right => 9000.0,
            };
        }

        clamp_paddles(&mut world, &config);

        let half_height = config.paddle_height / 2.0;
        let left = paddle_snapshot(&world, Side::Left).unwrap();
        let right = paddle_snapshot(&world, Side::Right).unwrap();
        assert_eq!(left.body.pos.y, half_height);
        assert_eq!(left.body.top(), 0.0);
        assert_eq!(right.body.pos.y, config.court_height - half_height);
        assert_eq!(right.body.bottom(), config.court_height);
    }
}
