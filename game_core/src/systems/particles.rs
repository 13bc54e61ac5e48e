use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{GameRng, Lifetime, Particle, SparkColor, Time};

/// Spawn a burst of sparks at `pos`
///
/// Each spark flies in a random direction at 30-100% of `speed` and lives
/// between 0.3 and 0.7 seconds.
pub fn emit_sparks(
    world: &mut World,
    rng: &mut GameRng,
    pos: Vec2,
    count: usize,
    color: SparkColor,
    speed: f32,
) {
    let sparks: Vec<_> = (0..count)
        .map(|_| {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            let spd = speed * rng.0.gen_range(0.3..1.0);
            let life = rng.0.gen_range(0.3..0.7);
            let particle = Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * spd,
                size: rng.0.gen_range(1.0..3.0),
                color,
            };
            (particle, Lifetime::new(life))
        })
        .collect();
    world.spawn_batch(sparks);
}

/// Advance sparks and age them; `gc` removes the dead ones
pub fn update_particles(world: &mut World, time: &Time) {
    for (_entity, (particle, lifetime)) in world.query_mut::<(&mut Particle, &mut Lifetime)>() {
        particle.step(time.dt);
        lifetime.t_left -= time.dt;
    }
}

/// Visible sparks with their remaining-life fraction (for alpha)
pub fn particle_snapshot(world: &World) -> Vec<(Particle, f32)> {
    world
        .query::<(&Particle, &Lifetime)>()
        .iter()
        .map(|(_e, (p, life))| (*p, life.fraction()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::gc;

    #[test]
    fn test_starts_with_no_particles() {
        let world = World::new();
        assert!(particle_snapshot(&world).is_empty());
    }

    #[test]
    fn test_emitted_particles_update_and_die() {
        let mut world = World::new();
        let mut rng = GameRng::new(3);
        emit_sparks(&mut world, &mut rng, Vec2::new(100.0, 100.0), 5, SparkColor::Paddle, 200.0);

        let sparks = particle_snapshot(&world);
        assert_eq!(sparks.len(), 5);
        for (spark, alpha) in &sparks {
            assert_eq!(spark.pos, Vec2::new(100.0, 100.0));
            assert_eq!(*alpha, 1.0);
            let speed = spark.vel.length();
            assert!((60.0..=200.0).contains(&speed), "speed {}", speed);
            assert!((1.0..3.0).contains(&spark.size));
        }

        // Longest possible life is under 0.7s
        let time = Time::new(0.1, 0.0);
        for _ in 0..8 {
            update_particles(&mut world, &time);
            gc(&mut world);
        }
        assert!(particle_snapshot(&world).is_empty());
        assert_eq!(world.len(), 0, "Dead sparks are despawned");
    }

    #[test]
    fn test_particles_move_over_time() {
        let mut world = World::new();
        let mut rng = GameRng::new(11);
        emit_sparks(&mut world, &mut rng, Vec2::ZERO, 1, SparkColor::Wall, 1000.0);

        update_particles(&mut world, &Time::new(0.1, 0.0));

        let (spark, alpha) = particle_snapshot(&world)[0];
        assert!(spark.pos != Vec2::ZERO, "Particle should have moved");
        assert!(alpha < 1.0, "Particle should fade");
    }
}
