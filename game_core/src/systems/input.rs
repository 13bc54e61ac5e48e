use hecs::World;

use crate::{Config, InputState, Paddle, Side};

/// Apply sampled input to the human paddle
///
/// Absolute pointer position goes first, keyboard nudges are added on top.
/// The paddle is clamped to the court afterwards.
pub fn apply_human_input(world: &mut World, input: &InputState, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Left {
            continue;
        }
        if let Some(y) = input.target_y {
            paddle.body.pos.y = y;
        }
        paddle.body.pos.y += input.nudge;
        paddle.body.pos.y = config.clamp_paddle_y(paddle.body.pos.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, paddle_snapshot};

    fn setup_world() -> (World, Config) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        (world, config)
    }

    #[test]
    fn test_target_y_moves_only_human_paddle() {
        let (mut world, config) = setup_world();
        let input = InputState {
            target_y: Some(120.0),
            nudge: 0.0,
        };

        apply_human_input(&mut world, &input, &config);

        assert_eq!(paddle_snapshot(&world, Side::Left).unwrap().body.pos.y, 120.0);
        assert_eq!(
            paddle_snapshot(&world, Side::Right).unwrap().body.pos.y,
            config.court_height / 2.0
        );
    }

    #[test]
    fn test_nudge_is_added_and_clamped() {
        let (mut world, config) = setup_world();
        let input = InputState {
            target_y: None,
            nudge: -30.0,
        };
        apply_human_input(&mut world, &input, &config);
        assert_eq!(paddle_snapshot(&world, Side::Left).unwrap().body.pos.y, 170.0);

        let input = InputState {
            target_y: Some(390.0),
            nudge: 50.0,
        };
        apply_human_input(&mut world, &input, &config);
        let half_height = config.paddle_height / 2.0;
        assert_eq!(
            paddle_snapshot(&world, Side::Left).unwrap().body.pos.y,
            config.court_height - half_height
        );
    }
}
