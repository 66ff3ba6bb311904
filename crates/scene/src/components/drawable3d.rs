use foundation::math::{Vec2, Vec3};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape3D {
    /// Axis-aligned box; `size` is full width/height/depth.
    Cuboid { size: Vec3 },
    /// Flat textured rectangle in the XY plane.
    Plane { size: Vec2 },
}

/// Linear RGBA, white.
pub const COLOR_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Drawable3D {
    pub shape: Shape3D,
    pub color: [f32; 4],
}

impl Drawable3D {
    pub fn cuboid(size: Vec3, color: [f32; 4]) -> Self {
        Self {
            shape: Shape3D::Cuboid { size },
            color,
        }
    }

    pub fn plane(size: Vec2) -> Self {
        Self {
            shape: Shape3D::Plane { size },
            color: COLOR_WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Drawable3D, Shape3D};
    use foundation::math::{Vec2, Vec3};

    #[test]
    fn create_cuboid_drawable() {
        let drawable = Drawable3D::cuboid(Vec3::new(0.15, 0.15, 0.3), [1.0, 0.0, 0.0, 1.0]);
        assert!(matches!(drawable.shape, Shape3D::Cuboid { .. }));
    }

    #[test]
    fn planes_default_to_white() {
        let drawable = Drawable3D::plane(Vec2::new(5.0, 5.0));
        assert_eq!(drawable.color, super::COLOR_WHITE);
    }
}
