use foundation::bounds::Aabb2;
use foundation::math::{MapProjection, MapRegion, PlaneFrame, Vec2, Vec3};
use scene::World;
use scene::components::Drawable3D;
use scene::entity::EntityId;
use scene::prefabs::spawn_map_plane;

use crate::layer::{Layer, LayerId};

/// Geographic bounds of the mainland map texture.
pub const MAINLAND_GEO: Aabb2 = Aabb2::new([-10.24, 34.81], [5.03, 44.26]);
/// Geographic bounds of the Canary Islands map texture.
pub const CANARY_GEO: Aabb2 = Aabb2::new([-18.402, 27.406], [-13.310, 29.473]);

/// World-space plane centers. The Canary plane sits off to the side.
pub const MAINLAND_OFFSET: Vec2 = Vec2::new(0.0, 0.0);
pub const CANARY_OFFSET: Vec2 = Vec2::new(-10.0, 0.0);

/// Untextured planes start square at this size; texture aspect stretches one
/// axis on resolution.
pub const BASE_PLANE_SIZE: f64 = 5.0;

pub const MAINLAND_NAME: &str = "España";
pub const CANARY_NAME: &str = "Canarias";

/// Pixel dimensions of a plane's texture image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct PlaneSlot {
    geo: Aabb2,
    offset: Vec2,
    name: &'static str,
    /// Full local width/height; `None` until the texture is resolved.
    size: Option<Vec2>,
    entity: Option<EntityId>,
}

impl PlaneSlot {
    fn new(geo: Aabb2, offset: Vec2, name: &'static str) -> Self {
        Self {
            geo,
            offset,
            name,
            size: None,
            entity: None,
        }
    }

    fn frame(&self) -> Option<PlaneFrame> {
        let size = self.size?;
        Some(PlaneFrame::new(
            self.geo,
            Vec2::new(size.x / 2.0, size.y / 2.0),
            self.offset,
        ))
    }
}

/// The two textured map planes.
///
/// Coordinate mapping depends on each plane's texture aspect ratio, so a
/// `MapProjection` can only be obtained once both textures are resolved;
/// callers that need to project (the geometry builder above all) take the
/// projection as a parameter and therefore cannot run early.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPlaneLayer {
    id: LayerId,
    mainland: PlaneSlot,
    canary: PlaneSlot,
}

impl MapPlaneLayer {
    pub fn new(id: u64) -> Self {
        Self {
            id: LayerId(id),
            mainland: PlaneSlot::new(MAINLAND_GEO, MAINLAND_OFFSET, MAINLAND_NAME),
            canary: PlaneSlot::new(CANARY_GEO, CANARY_OFFSET, CANARY_NAME),
        }
    }

    /// Spawn both plane entities. Sizes reflect whatever has been resolved
    /// so far; resolving later updates the spawned drawable.
    pub fn spawn_planes(&mut self, world: &mut World) {
        for slot in [&mut self.mainland, &mut self.canary] {
            let size = slot.size.unwrap_or(Vec2::new(BASE_PLANE_SIZE, BASE_PLANE_SIZE));
            let center = Vec3::new(slot.offset.x, slot.offset.y, 0.0);
            slot.entity = Some(spawn_map_plane(world, center, size, slot.name));
        }
    }

    /// Resolve a plane's extent from its texture dimensions.
    ///
    /// The taller axis of the image stretches the matching plane axis by the
    /// aspect ratio; the other axis stays at the base size.
    pub fn resolve_texture(&mut self, world: &mut World, region: MapRegion, texture: TextureSize) {
        let slot = match region {
            MapRegion::Mainland => &mut self.mainland,
            MapRegion::Canary => &mut self.canary,
        };

        let (w, h) = (texture.width as f64, texture.height as f64);
        let size = if h > w {
            Vec2::new(BASE_PLANE_SIZE, BASE_PLANE_SIZE * h / w)
        } else {
            Vec2::new(BASE_PLANE_SIZE * w / h, BASE_PLANE_SIZE)
        };
        slot.size = Some(size);

        if let Some(entity) = slot.entity {
            world.set_drawable_3d(entity, Drawable3D::plane(size));
        }
    }

    /// Projection over both planes; `None` until both textures are resolved.
    pub fn projection(&self) -> Option<MapProjection> {
        Some(MapProjection::new(
            self.mainland.frame()?,
            self.canary.frame()?,
        ))
    }

    /// World-space center of a region's plane.
    pub fn region_origin(region: MapRegion) -> Vec2 {
        match region {
            MapRegion::Mainland => MAINLAND_OFFSET,
            MapRegion::Canary => CANARY_OFFSET,
        }
    }
}

impl Layer for MapPlaneLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}
