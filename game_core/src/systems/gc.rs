use hecs::World;

use crate::components::*;

/// Garbage collection: despawn expired entities
pub fn gc(world: &mut World) {
    let to_remove: Vec<_> = world
        .query::<&Lifetime>()
        .iter()
        .filter(|(_e, lifetime)| lifetime.is_expired())
        .map(|(entity, _)| entity)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_only_removes_expired() {
        let mut world = World::new();
        let alive = world.spawn((Lifetime::new(0.5),));
        let mut dead = Lifetime::new(0.5);
        dead.t_left = 0.0;
        world.spawn((dead,));
        let ball = world.spawn((Ball::new(10.0),));

        gc(&mut world);

        assert_eq!(world.len(), 2);
        assert!(world.contains(alive));
        assert!(world.contains(ball), "Entities without a lifetime are never collected");
    }
}
