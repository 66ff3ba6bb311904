use foundation::math::{Vec2, Vec3};

use crate::World;
use crate::components::{ComponentProperties, Drawable3D, Transform};
use crate::entity::EntityId;

/// Property key tagging map-plane entities with their region name.
pub const PROP_PLANE: &str = "plane";

/// Spawn a visible, named map plane centered at `center`.
pub fn spawn_map_plane(world: &mut World, center: Vec3, size: Vec2, name: &str) -> EntityId {
    let entity = world.spawn();
    world.set_transform(entity, Transform::translate(center));
    world.set_drawable_3d(entity, Drawable3D::plane(size));
    world.set_properties(
        entity,
        ComponentProperties::new(vec![(PROP_PLANE.to_string(), name.to_string())]),
    );
    entity
}
