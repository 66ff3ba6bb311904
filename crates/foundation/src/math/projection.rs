//! Geographic-to-plane projection.
//!
//! Provinces are drawn on one of two textured map planes (Iberian mainland,
//! Canary Islands). Each plane has a fixed real-world bounding box and a
//! local half-extent resolved from its texture's aspect ratio; a point is
//! projected by rescaling each axis independently into the plane's local
//! range and adding the plane's world offset.

use super::Vec2;
use crate::bounds::Aabb2;

/// Latitude below which a point belongs to the Canary Islands plane.
///
/// A fixed threshold, not a boundary lookup: a point at exactly 30 degrees
/// routes to the mainland.
pub const CANARY_LAT_THRESHOLD: f64 = 30.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MapRegion {
    Mainland,
    Canary,
}

/// Rescale `value` from `[vmin, vmax]` to `[dmin, dmax]`.
///
/// `t` is deliberately not clamped: values outside the source range
/// extrapolate outside the destination range instead of erroring.
pub fn linear_map(value: f64, vmin: f64, vmax: f64, dmin: f64, dmax: f64) -> f64 {
    let t = 1.0 - (vmax - value) / (vmax - vmin);
    dmin + t * (dmax - dmin)
}

/// One map plane's mapping frame.
///
/// `half_extent` is half the plane's local width/height; it is only known
/// once the plane's texture dimensions have been resolved, so a `PlaneFrame`
/// existing at all means the plane is ready to project onto.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneFrame {
    /// Geographic bounds: min/max longitude on x, min/max latitude on y.
    pub geo: Aabb2,
    pub half_extent: Vec2,
    /// World-space position of the plane's center.
    pub offset: Vec2,
}

impl PlaneFrame {
    pub fn new(geo: Aabb2, half_extent: Vec2, offset: Vec2) -> Self {
        Self {
            geo,
            half_extent,
            offset,
        }
    }

    /// Project a (longitude, latitude) pair into this plane's world space.
    ///
    /// Both axes map into `[-half, +half]` around the plane's offset. Points
    /// outside the geographic bounds extrapolate past the plane's edge.
    pub fn project(&self, lon: f64, lat: f64) -> Vec2 {
        let x = linear_map(
            lon,
            self.geo.min[0],
            self.geo.max[0],
            -self.half_extent.x,
            self.half_extent.x,
        );
        let y = linear_map(
            lat,
            self.geo.min[1],
            self.geo.max[1],
            -self.half_extent.y,
            self.half_extent.y,
        );
        Vec2::new(x, y) + self.offset
    }
}

/// Projection over both map planes with the latitude-based region switch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapProjection {
    pub mainland: PlaneFrame,
    pub canary: PlaneFrame,
}

impl MapProjection {
    pub fn new(mainland: PlaneFrame, canary: PlaneFrame) -> Self {
        Self { mainland, canary }
    }

    pub fn region_for(lat: f64) -> MapRegion {
        if lat < CANARY_LAT_THRESHOLD {
            MapRegion::Canary
        } else {
            MapRegion::Mainland
        }
    }

    pub fn frame(&self, region: MapRegion) -> &PlaneFrame {
        match region {
            MapRegion::Mainland => &self.mainland,
            MapRegion::Canary => &self.canary,
        }
    }

    /// World-space center of a region's plane.
    pub fn region_origin(&self, region: MapRegion) -> Vec2 {
        self.frame(region).offset
    }

    pub fn project(&self, lon: f64, lat: f64) -> (MapRegion, Vec2) {
        let region = Self::region_for(lat);
        (region, self.frame(region).project(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::{CANARY_LAT_THRESHOLD, MapProjection, MapRegion, PlaneFrame, linear_map};
    use crate::bounds::Aabb2;
    use crate::math::Vec2;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn test_projection() -> MapProjection {
        let mainland = PlaneFrame::new(
            Aabb2::new([-10.24, 34.81], [5.03, 44.26]),
            Vec2::new(2.5, 2.5),
            Vec2::new(0.0, 0.0),
        );
        let canary = PlaneFrame::new(
            Aabb2::new([-18.402, 27.406], [-13.310, 29.473]),
            Vec2::new(2.5, 1.0),
            Vec2::new(-10.0, 0.0),
        );
        MapProjection::new(mainland, canary)
    }

    #[test]
    fn linear_map_endpoints_and_midpoint() {
        assert_close(linear_map(0.0, 0.0, 10.0, -1.0, 1.0), -1.0, 1e-12);
        assert_close(linear_map(10.0, 0.0, 10.0, -1.0, 1.0), 1.0, 1e-12);
        assert_close(linear_map(5.0, 0.0, 10.0, -1.0, 1.0), 0.0, 1e-12);
    }

    #[test]
    fn linear_map_does_not_clamp() {
        assert_close(linear_map(20.0, 0.0, 10.0, -1.0, 1.0), 3.0, 1e-12);
        assert_close(linear_map(-10.0, 0.0, 10.0, -1.0, 1.0), -3.0, 1e-12);
    }

    #[test]
    fn latitude_threshold_routes_regions() {
        assert_eq!(MapProjection::region_for(40.4), MapRegion::Mainland);
        assert_eq!(MapProjection::region_for(28.1), MapRegion::Canary);
        // Exactly at the threshold routes to the mainland.
        assert_eq!(
            MapProjection::region_for(CANARY_LAT_THRESHOLD),
            MapRegion::Mainland
        );
    }

    #[test]
    fn bounding_box_corners_map_to_extent_corners() {
        let p = test_projection();
        for (frame, region) in [
            (p.mainland, MapRegion::Mainland),
            (p.canary, MapRegion::Canary),
        ] {
            for (lon, sx) in [(frame.geo.min[0], -1.0), (frame.geo.max[0], 1.0)] {
                for (lat, sy) in [(frame.geo.min[1], -1.0), (frame.geo.max[1], 1.0)] {
                    let (got_region, got) = p.project(lon, lat);
                    assert_eq!(got_region, region);
                    assert_close(got.x, frame.offset.x + sx * frame.half_extent.x, 1e-9);
                    assert_close(got.y, frame.offset.y + sy * frame.half_extent.y, 1e-9);
                }
            }
        }
    }

    #[test]
    fn canary_plane_is_offset_in_world_space() {
        let p = test_projection();
        let (region, pos) = p.project(-15.856, 28.41);
        assert_eq!(region, MapRegion::Canary);
        assert!(pos.x < -7.5 && pos.x > -12.5, "inside the offset plane: {pos:?}");
    }

    #[test]
    fn out_of_bounds_point_extrapolates_past_plane_edge() {
        let p = test_projection();
        let (region, pos) = p.project(7.0, 40.0);
        assert_eq!(region, MapRegion::Mainland);
        assert!(pos.x > p.mainland.half_extent.x);
    }
}
