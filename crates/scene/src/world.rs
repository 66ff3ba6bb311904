use crate::components::{ComponentProperties, Drawable3D, Transform, Visibility};
use crate::entity::EntityId;
use crate::selection::SelectionSet;
use foundation::handles::Handle;

/// Column-storage entity world.
///
/// Entities are dense indices; each component lives in its own
/// `Vec<Option<T>>` column. Entities without an explicit `Visibility`
/// component count as visible.
#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    transforms: Vec<Option<Transform>>,
    visibility: Vec<Option<Visibility>>,
    drawables_3d: Vec<Option<Drawable3D>>,
    properties: Vec<Option<ComponentProperties>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(Handle::new(self.next_index, 0));
        self.next_index += 1;
        self.ensure_capacity(id.index() as usize);
        id
    }

    pub fn entity_count(&self) -> u32 {
        self.next_index
    }

    /// Spawned entities in ascending index order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        (0..self.next_index).map(|idx| EntityId(Handle::new(idx, 0)))
    }

    pub fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        self.ensure_capacity(entity.index() as usize);
        self.transforms[entity.index() as usize] = Some(transform);
    }

    pub fn transform(&self, entity: EntityId) -> Option<Transform> {
        self.transforms.get(entity.index() as usize).and_then(|t| *t)
    }

    pub fn set_visibility(&mut self, entity: EntityId, visibility: Visibility) {
        self.ensure_capacity(entity.index() as usize);
        self.visibility[entity.index() as usize] = Some(visibility);
    }

    /// Toggle a single entity's visibility flag.
    pub fn set_visible(&mut self, entity: EntityId, visible: bool) {
        self.set_visibility(entity, Visibility { visible });
    }

    /// Toggle every entity in `set` at once.
    pub fn apply_visibility(&mut self, set: &SelectionSet, visible: bool) {
        for entity in set.iter_entities() {
            self.set_visible(entity, visible);
        }
    }

    pub fn visible(&self, entity: EntityId) -> bool {
        self.visibility
            .get(entity.index() as usize)
            .and_then(|v| *v)
            .map(|v| v.visible)
            .unwrap_or(true)
    }

    pub fn set_drawable_3d(&mut self, entity: EntityId, drawable: Drawable3D) {
        self.ensure_capacity(entity.index() as usize);
        self.drawables_3d[entity.index() as usize] = Some(drawable);
    }

    pub fn drawable_3d(&self, entity: EntityId) -> Option<Drawable3D> {
        self.drawables_3d
            .get(entity.index() as usize)
            .and_then(|d| *d)
    }

    pub fn set_properties(&mut self, entity: EntityId, properties: ComponentProperties) {
        self.ensure_capacity(entity.index() as usize);
        self.properties[entity.index() as usize] = Some(properties);
    }

    pub fn properties(&self, entity: EntityId) -> Option<&ComponentProperties> {
        self.properties
            .get(entity.index() as usize)
            .and_then(|p| p.as_ref())
    }

    /// Visible 3D drawables in ascending entity order.
    pub fn drawables_3d(&self) -> Vec<(EntityId, Transform, Drawable3D)> {
        let mut out = Vec::new();
        for (idx, drawable) in self.drawables_3d.iter().enumerate() {
            let Some(drawable) = drawable else { continue };
            let Some(transform) = self.transforms.get(idx).and_then(|t| *t) else {
                continue;
            };
            let visible = self
                .visibility
                .get(idx)
                .and_then(|v| *v)
                .map(|v| v.visible)
                .unwrap_or(true);
            if !visible {
                continue;
            }

            out.push((EntityId(Handle::new(idx as u32, 0)), transform, *drawable));
        }
        out
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.transforms.len() <= idx {
            let new_len = idx + 1;
            self.transforms.resize(new_len, None);
            self.visibility.resize(new_len, None);
            self.drawables_3d.resize(new_len, None);
            self.properties.resize(new_len, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::components::{Drawable3D, Transform};
    use crate::selection::SelectionSet;
    use foundation::math::Vec3;

    fn cuboid() -> Drawable3D {
        Drawable3D::cuboid(Vec3::new(1.0, 1.0, 1.0), [1.0, 1.0, 1.0, 1.0])
    }

    #[test]
    fn spawn_and_collect_drawables() {
        let mut world = World::new();
        let entity = world.spawn();
        world.set_transform(entity, Transform::identity());
        world.set_drawable_3d(entity, cuboid());

        let drawables = world.drawables_3d();
        assert_eq!(drawables.len(), 1);
        assert_eq!(drawables[0].0, entity);
    }

    #[test]
    fn hidden_entities_are_filtered() {
        let mut world = World::new();
        let entity = world.spawn();
        world.set_transform(entity, Transform::identity());
        world.set_drawable_3d(entity, cuboid());
        world.set_visible(entity, false);

        assert!(world.drawables_3d().is_empty());
        world.set_visible(entity, true);
        assert_eq!(world.drawables_3d().len(), 1);
    }

    #[test]
    fn apply_visibility_toggles_whole_set() {
        let mut world = World::new();
        let mut set = SelectionSet::new();
        for _ in 0..3 {
            let entity = world.spawn();
            world.set_transform(entity, Transform::identity());
            world.set_drawable_3d(entity, cuboid());
            set.insert(entity);
        }

        world.apply_visibility(&set, false);
        assert!(world.drawables_3d().is_empty());
        world.apply_visibility(&set, true);
        assert_eq!(world.drawables_3d().len(), 3);
    }
}
