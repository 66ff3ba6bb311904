use catalog::{CatalogError, ElectionCatalog, ElectionRecord};
use foundation::math::{MapProjection, MapRegion, Vec3};
use scene::World;
use scene::components::{ComponentProperties, Drawable3D, Transform, Visibility};
use scene::entity::EntityId;

use crate::layer::{Layer, LayerId};
use crate::symbology::rgb_to_color;

/// Box depth per parliamentary seat, world units.
pub const SEAT_DEPTH_SCALE: f64 = 0.03;
/// Box footprint on the map plane (width and height).
pub const BOX_FOOTPRINT: f64 = 0.15;

/// Property keys every seat box is tagged with.
pub const PROP_ELECTION: &str = "election";
pub const PROP_PROVINCE: &str = "province";
pub const PROP_PARTY: &str = "party";

#[derive(Debug)]
pub enum BuildError {
    /// Province in the results has no geographic record.
    UnknownProvince { province: String },
    /// Missing or malformed color for a party that won seats.
    Color {
        province: String,
        source: CatalogError,
    },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::UnknownProvince { province } => {
                write!(f, "unknown province in results: {province}")
            }
            BuildError::Color { province, source } => {
                write!(f, "color lookup failed for {province}: {source}")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// One province's built stack, bottom box first.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltStack {
    pub province: String,
    pub region: MapRegion,
    pub entities: Vec<EntityId>,
}

/// Builds the seat boxes for whole elections.
///
/// All boxes spawn hidden; visibility is the selection controller's job.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeatStackLayer {
    id: LayerId,
}

impl SeatStackLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    /// Build one election's geometry: per province, one hidden box per party
    /// with nonzero seats, stacked contiguously along Z in header order.
    ///
    /// Deterministic: building the same record twice produces identical
    /// stacks (same depths, same Z offsets, same ordering).
    pub fn build_election(
        &self,
        world: &mut World,
        catalog: &ElectionCatalog,
        projection: &MapProjection,
        record: &ElectionRecord,
    ) -> Result<Vec<BuiltStack>, BuildError> {
        let mut stacks = Vec::with_capacity(record.results.len());
        for row in &record.results {
            let geo = catalog
                .geo(&row.province)
                .map_err(|_| BuildError::UnknownProvince {
                    province: row.province.clone(),
                })?;
            let (region, position) = projection.project(geo.longitude, geo.latitude);

            let mut entities = Vec::new();
            let mut previous_depth = 0.0;
            let mut previous_z = 0.0;
            for (party, &seats) in row.seats.iter().enumerate() {
                if seats == 0 {
                    continue;
                }

                let depth = seats as f64 * SEAT_DEPTH_SCALE;
                let z = previous_z + previous_depth / 2.0 + depth / 2.0;
                let rgb = catalog
                    .color(record.index, party)
                    .and_then(|c| c.rgb())
                    .map_err(|e| BuildError::Color {
                        province: row.province.clone(),
                        source: e,
                    })?;

                let entity = world.spawn();
                world.set_transform(
                    entity,
                    Transform::translate(Vec3::new(position.x, position.y, z)),
                );
                world.set_drawable_3d(
                    entity,
                    Drawable3D::cuboid(
                        Vec3::new(BOX_FOOTPRINT, BOX_FOOTPRINT, depth),
                        rgb_to_color(rgb),
                    ),
                );
                world.set_visibility(entity, Visibility::hidden());
                world.set_properties(
                    entity,
                    ComponentProperties::new(vec![
                        (PROP_ELECTION.to_string(), record.index.to_string()),
                        (PROP_PROVINCE.to_string(), row.province.clone()),
                        (
                            PROP_PARTY.to_string(),
                            record.party_name(party).unwrap_or_default().to_string(),
                        ),
                    ]),
                );

                entities.push(entity);
                previous_depth = depth;
                previous_z = z;
            }

            stacks.push(BuiltStack {
                province: row.province.clone(),
                region,
                entities,
            });
        }
        Ok(stacks)
    }
}

impl Layer for SeatStackLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}
