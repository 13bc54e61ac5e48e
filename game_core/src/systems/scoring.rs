use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check if the ball left the court and award the point
///
/// Only a ball that is entirely past a side line counts. Returns the side
/// that scored; the caller decides what happens to the match.
pub fn check_scoring(world: &mut World, config: &Config, events: &mut Events) -> Option<Side> {
    let scorer = {
        let mut ball_query = world.query::<&Ball>();
        let (_e, ball) = ball_query.iter().next()?;
        if ball.body.right() < 0.0 {
            Some(Side::Right)
        } else if ball.body.left() > config.court_width {
            Some(Side::Left)
        } else {
            None
        }
    }?;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
        }
    }
    events.scored = Some(scorer);
    Some(scorer)
}

/// Side whose score has reached `win_score`, if any
pub fn winner(world: &World, win_score: u32) -> Option<Side> {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.score >= win_score)
        .map(|(_e, p)| p.side)
}

/// Zero both scores for a new match
pub fn reset_scores(world: &mut World) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, paddle_snapshot};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        (world, config, Events::new())
    }

    fn scores(world: &World) -> (u32, u32) {
        (
            paddle_snapshot(world, Side::Left).unwrap().score,
            paddle_snapshot(world, Side::Right).unwrap().score,
        )
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(-5.1, 200.0), Vec2::new(-250.0, 0.0));

        let scorer = check_scoring(&mut world, &config, &mut events);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(scores(&world), (0, 1), "Right player should score");
        assert_eq!(events.scored, Some(Side::Right));
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut events) = setup_world();
        let x = config.court_width + 5.1;
        create_ball(&mut world, &config, Vec2::new(x, 200.0), Vec2::new(250.0, 0.0));

        let scorer = check_scoring(&mut world, &config, &mut events);

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(scores(&world), (1, 0), "Left player should score");
        assert_eq!(events.scored, Some(Side::Left));
    }

    #[test]
    fn test_partially_out_ball_does_not_score() {
        let (mut world, config, mut events) = setup_world();
        // Centre past the line, right edge still inside
        create_ball(&mut world, &config, Vec2::new(-2.0, 200.0), Vec2::new(-250.0, 0.0));
        assert_eq!(check_scoring(&mut world, &config, &mut events), None);

        // Right edge exactly on the line
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(-5.0, 200.0), Vec2::new(-250.0, 0.0));
        assert_eq!(check_scoring(&mut world, &config, &mut events), None);
        assert_eq!(scores(&world), (0, 0));
        assert_eq!(events.scored, None);
    }

    #[test]
    fn test_no_scoring_without_ball() {
        let (mut world, config, mut events) = setup_world();
        assert_eq!(check_scoring(&mut world, &config, &mut events), None);
    }

    #[test]
    fn test_winner_and_reset() {
        let (mut world, config, _events) = setup_world();
        assert_eq!(winner(&world, config.win_score), None);

        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.score = if paddle.side == Side::Right { 7 } else { 6 };
        }
        assert_eq!(winner(&world, config.win_score), Some(Side::Right));

        reset_scores(&mut world);
        assert_eq!(scores(&world), (0, 0));
    }
}
