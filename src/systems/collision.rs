//! Per-tick containment of every actor with a body.

use hecs::World;

use crate::components::{Body, Position};
use crate::error::CollisionError;
use crate::spatial_index::SpatialIndex;

/// Pull every `Position + Body` entity back inside the traversable area.
///
/// Returns how many entities were moved.
pub fn confine_actors(world: &mut World, index: &SpatialIndex) -> Result<usize, CollisionError> {
    puffin::profile_function!();

    let mut corrected = 0;
    for (_, (pos, body)) in world.query_mut::<(&mut Position, &Body)>() {
        let here = pos.to_vec2();
        let resolution = index.resolve_detailed(here, &body.bounds_at(here))?;
        if resolution.is_corrected() {
            *pos = Position::from_vec2(resolution.position());
            corrected += 1;
        }
    }
    Ok(corrected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon_gen::{Room, RoomId};
    use crate::geometry::{Rect, WorldRect};
    use glam::Vec2;

    fn room_index() -> SpatialIndex {
        let mut index = SpatialIndex::new();
        index.load(&[Room::new(RoomId(0), Rect::new(0, 0, 10, 10))], &[], 16.0);
        index
    }

    #[test]
    fn test_unloaded_index_is_an_error() {
        let mut world = World::new();
        world.spawn((Position::new(0.0, 0.0), Body::new(4.0, 4.0)));
        assert_eq!(
            confine_actors(&mut world, &SpatialIndex::new()),
            Err(CollisionError::IndexNotLoaded)
        );
    }

    #[test]
    fn test_only_escaped_actors_move() {
        let index = room_index();
        let mut world = World::new();
        let inside = world.spawn((Position::new(80.0, 80.0), Body::new(16.0, 16.0)));
        let outside = world.spawn((Position::new(400.0, 80.0), Body::new(16.0, 16.0)));

        assert_eq!(confine_actors(&mut world, &index), Ok(1));
        assert_eq!(
            world.get::<&Position>(inside).unwrap().to_vec2(),
            Vec2::new(80.0, 80.0)
        );
        assert_eq!(
            world.get::<&Position>(outside).unwrap().to_vec2(),
            Vec2::new(152.0, 80.0)
        );

        // Everyone is inside now
        assert_eq!(confine_actors(&mut world, &index), Ok(0));
    }

    #[test]
    fn test_oversized_actor_pinned_in_place_is_not_counted() {
        let mut index = SpatialIndex::new();
        index.load_regions(vec![WorldRect::new(0.0, 0.0, 10.0, 100.0)], Vec::new());
        let mut world = World::new();
        let wide = world.spawn((Position::new(10.0, 50.0), Body::new(20.0, 10.0)));

        assert_eq!(confine_actors(&mut world, &index), Ok(0));
        assert_eq!(
            world.get::<&Position>(wide).unwrap().to_vec2(),
            Vec2::new(10.0, 50.0)
        );
    }

    #[test]
    fn test_entities_without_body_are_ignored() {
        let index = room_index();
        let mut world = World::new();
        let ghost = world.spawn((Position::new(-500.0, -500.0),));
        assert_eq!(confine_actors(&mut world, &index), Ok(0));
        assert_eq!(
            world.get::<&Position>(ghost).unwrap().to_vec2(),
            Vec2::new(-500.0, -500.0)
        );
    }
}
