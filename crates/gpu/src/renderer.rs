use foundation::math::Vec3;
use scene::components::{Shape3D, Transform};
use scene::world::World;

/// Orbit-style camera: `target` is the focus point the viewer recenters on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_rad: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera3D {
    pub fn look_at(position: Vec3, target: Vec3, fov_y_rad: f64, near: f64, far: f64) -> Self {
        Self {
            position,
            target,
            fov_y_rad,
            near,
            far,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderCommand {
    Draw3D {
        transform: Transform,
        shape: Shape3D,
        color: [f32; 4],
    },
}

/// One frame's worth of draw work.
///
/// `background` renders first (the main pass draws over it without
/// clearing); `None` means the background layer is toggled off.
#[derive(Debug, Default)]
pub struct RenderFrame {
    pub background: Option<[f32; 4]>,
    pub commands: Vec<RenderCommand>,
}

pub struct Renderer;

impl Renderer {
    /// Collect draw commands for every visible drawable, in entity order.
    pub fn collect(world: &World, _camera: Camera3D, background: Option<[f32; 4]>) -> RenderFrame {
        let mut frame = RenderFrame {
            background,
            commands: Vec::new(),
        };
        for (_, transform, drawable) in world.drawables_3d() {
            frame.commands.push(RenderCommand::Draw3D {
                transform,
                shape: drawable.shape,
                color: drawable.color,
            });
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{Camera3D, Renderer};
    use foundation::math::{Vec2, Vec3};
    use scene::components::{Drawable3D, Transform};
    use scene::world::World;

    fn camera() -> Camera3D {
        Camera3D::look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, 0.0),
            1.0,
            0.1,
            1000.0,
        )
    }

    #[test]
    fn collects_only_visible_drawables() {
        let mut world = World::new();
        let shown = world.spawn();
        world.set_transform(shown, Transform::identity());
        world.set_drawable_3d(shown, Drawable3D::plane(Vec2::new(5.0, 5.0)));

        let hidden = world.spawn();
        world.set_transform(hidden, Transform::identity());
        world.set_drawable_3d(
            hidden,
            Drawable3D::cuboid(Vec3::new(0.15, 0.15, 0.3), [1.0, 0.0, 0.0, 1.0]),
        );
        world.set_visible(hidden, false);

        let frame = Renderer::collect(&world, camera(), None);
        assert_eq!(frame.commands.len(), 1);
        assert!(frame.background.is_none());
    }

    #[test]
    fn background_color_is_carried_through() {
        let world = World::new();
        let frame = Renderer::collect(&world, camera(), Some([0.5, 0.5, 0.2, 1.0]));
        assert_eq!(frame.background, Some([0.5, 0.5, 0.2, 1.0]));
    }
}
