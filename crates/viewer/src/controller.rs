use catalog::{CatalogError, ElectionCatalog};
use foundation::math::{MapProjection, MapRegion, Vec3};
use layers::seat_stacks::{PROP_ELECTION, PROP_PROVINCE};
use layers::symbology::palette_for_seats;
use scene::World;
use scene::query::{PropertyFilter, query_entities};

use crate::selection::{ProvinceFilter, Selection};

/// Everything a selection change needs to read and mutate.
pub struct SelectContext<'a> {
    pub world: &'a mut World,
    pub catalog: &'a ElectionCatalog,
    pub projection: &'a MapProjection,
    /// The control panel's current map-region choice, used for the `All`
    /// camera focus.
    pub map_region: MapRegion,
}

/// What a selection change decided, for the caller to push to the
/// presentation surfaces (camera, background, info board, widgets).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOutcome {
    pub camera_focus: Vec3,
    /// Region implied by the selection: the chosen map for `All`, the
    /// province's own region otherwise.
    pub region: MapRegion,
    /// Boxes made visible.
    pub shown: usize,
    pub palette: Vec<[f32; 4]>,
}

#[derive(Debug)]
pub enum SelectError {
    Catalog(CatalogError),
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::Catalog(e) => write!(f, "selection failed: {e}"),
        }
    }
}

impl std::error::Error for SelectError {}

impl From<CatalogError> for SelectError {
    fn from(e: CatalogError) -> Self {
        SelectError::Catalog(e)
    }
}

/// Owns the one mutable `Selection`; every change goes through [`select`].
///
/// [`select`]: SelectionController::select
#[derive(Debug, Default)]
pub struct SelectionController {
    selection: Option<Selection>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Switch the displayed (election, province filter) pair.
    ///
    /// Runs to completion in one call: hides the previous election's boxes
    /// unconditionally, shows the new election's matching subset, and
    /// reports the camera focus and background palette for the caller to
    /// apply. Validates before mutating, so a failed call leaves visibility
    /// untouched.
    ///
    /// A filter naming a province absent from the election's rows shows
    /// zero boxes and an empty palette; only a province unknown to the
    /// geography (no coordinates to focus on) is an error.
    pub fn select(
        &mut self,
        ctx: SelectContext<'_>,
        election: usize,
        filter: ProvinceFilter,
    ) -> Result<SelectOutcome, SelectError> {
        let record = ctx.catalog.election(election)?;

        // Every fallible step runs before the first visibility mutation.
        let (region, camera_focus) = match &filter {
            ProvinceFilter::All => {
                let origin = ctx.projection.region_origin(ctx.map_region);
                (ctx.map_region, Vec3::new(origin.x, origin.y, 0.0))
            }
            ProvinceFilter::Province(name) => {
                let geo = ctx.catalog.geo(name)?;
                let (region, position) = ctx.projection.project(geo.longitude, geo.latitude);
                (region, Vec3::new(position.x, position.y, 0.0))
            }
        };

        let palette = match &filter {
            ProvinceFilter::All => palette_for_seats(ctx.catalog, election, &record.totals.seats)?,
            ProvinceFilter::Province(name) => match record.province_row(name) {
                Some(row) => palette_for_seats(ctx.catalog, election, &row.seats)?,
                None => Vec::new(),
            },
        };

        if let Some(previous) = &self.selection {
            let hide = query_entities(
                ctx.world,
                &[PropertyFilter::eq(PROP_ELECTION, previous.election.to_string())],
            );
            ctx.world.apply_visibility(&hide, false);
        }

        let mut filters = vec![PropertyFilter::eq(PROP_ELECTION, election.to_string())];
        if let ProvinceFilter::Province(name) = &filter {
            filters.push(PropertyFilter::eq(PROP_PROVINCE, name.clone()));
        }
        let show = query_entities(ctx.world, &filters);
        ctx.world.apply_visibility(&show, true);

        self.selection = Some(Selection { election, filter });

        Ok(SelectOutcome {
            camera_focus,
            region,
            shown: show.len(),
            palette,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectContext, SelectError, SelectionController};
    use crate::selection::ProvinceFilter;
    use catalog::{CatalogError, ElectionCatalog, GeoRecord, PartyColor};
    use foundation::bounds::Aabb2;
    use foundation::math::{MapProjection, MapRegion, PlaneFrame, Vec2};
    use formats::parse_election_results;
    use layers::seat_stacks::SeatStackLayer;
    use scene::World;

    fn test_projection() -> MapProjection {
        MapProjection::new(
            PlaneFrame::new(
                Aabb2::new([-10.24, 34.81], [5.03, 44.26]),
                Vec2::new(2.5, 2.5),
                Vec2::new(0.0, 0.0),
            ),
            PlaneFrame::new(
                Aabb2::new([-18.402, 27.406], [-13.310, 29.473]),
                Vec2::new(2.5, 1.0),
                Vec2::new(-10.0, 0.0),
            ),
        )
    }

    fn colors() -> Vec<PartyColor> {
        vec![
            PartyColor::new("FFFF0000"),
            PartyColor::new("FF00FF00"),
            PartyColor::new("FF0000FF"),
        ]
    }

    fn test_catalog() -> ElectionCatalog {
        let mut catalog = ElectionCatalog::new();
        catalog.insert_election(
            parse_election_results(
                "Provincia;UCD;PSOE;PCE\nMadrid;10;0;5\nSevilla;4;7;1\nTotal;40;5;20\n",
                0,
            )
            .unwrap(),
            colors(),
            "Junio de 1977",
        );
        catalog.insert_election(
            parse_election_results(
                "Provincia;UCD;PSOE;PCE\nMadrid;8;9;0\nTotal;30;25;8\n",
                1,
            )
            .unwrap(),
            colors(),
            "Marzo de 1979",
        );
        catalog.insert_geography(vec![
            GeoRecord {
                name: "Madrid".into(),
                latitude: 40.4165,
                longitude: -3.70256,
            },
            GeoRecord {
                name: "Sevilla".into(),
                latitude: 37.38264,
                longitude: -5.99629,
            },
        ]);
        catalog
    }

    fn build_world(catalog: &ElectionCatalog) -> World {
        let mut world = World::new();
        let layer = SeatStackLayer::new(2);
        let projection = test_projection();
        for index in catalog.loaded_elections() {
            layer
                .build_election(&mut world, catalog, &projection, catalog.election(index).unwrap())
                .unwrap();
        }
        world
    }

    fn visible_count(world: &World) -> usize {
        world.drawables_3d().len()
    }

    #[test]
    fn selection_is_exclusive_across_elections() {
        let catalog = test_catalog();
        let mut world = build_world(&catalog);
        let projection = test_projection();
        let mut controller = SelectionController::new();

        let outcome = controller
            .select(
                SelectContext {
                    world: &mut world,
                    catalog: &catalog,
                    projection: &projection,
                    map_region: MapRegion::Mainland,
                },
                0,
                ProvinceFilter::All,
            )
            .unwrap();
        // Election 0: Madrid has 2 nonzero parties, Sevilla 3.
        assert_eq!(outcome.shown, 5);
        assert_eq!(visible_count(&world), 5);

        let outcome = controller
            .select(
                SelectContext {
                    world: &mut world,
                    catalog: &catalog,
                    projection: &projection,
                    map_region: MapRegion::Mainland,
                },
                1,
                ProvinceFilter::All,
            )
            .unwrap();
        // Election 1: only Madrid with 2 nonzero parties. Nothing of
        // election 0 may remain visible.
        assert_eq!(outcome.shown, 2);
        assert_eq!(visible_count(&world), 2);
    }

    #[test]
    fn province_filter_shows_matching_subset_and_focuses_camera() {
        let catalog = test_catalog();
        let mut world = build_world(&catalog);
        let projection = test_projection();
        let mut controller = SelectionController::new();

        let outcome = controller
            .select(
                SelectContext {
                    world: &mut world,
                    catalog: &catalog,
                    projection: &projection,
                    map_region: MapRegion::Mainland,
                },
                0,
                ProvinceFilter::Province("Madrid".into()),
            )
            .unwrap();

        assert_eq!(outcome.shown, 2);
        assert_eq!(outcome.region, MapRegion::Mainland);
        // Focus sits at Madrid's projected position, not the origin.
        let geo = catalog.geo("Madrid").unwrap();
        let (_, expected) = projection.project(geo.longitude, geo.latitude);
        assert!((outcome.camera_focus.x - expected.x).abs() < 1e-12);
        assert!((outcome.camera_focus.y - expected.y).abs() < 1e-12);
        assert_eq!(outcome.camera_focus.z, 0.0);
        // Two boxes, both Madrid's.
        assert_eq!(visible_count(&world), 2);
        assert_eq!(outcome.palette.len(), 2);
    }

    #[test]
    fn all_focus_follows_the_chosen_map_region() {
        let catalog = test_catalog();
        let mut world = build_world(&catalog);
        let projection = test_projection();
        let mut controller = SelectionController::new();

        let outcome = controller
            .select(
                SelectContext {
                    world: &mut world,
                    catalog: &catalog,
                    projection: &projection,
                    map_region: MapRegion::Canary,
                },
                0,
                ProvinceFilter::All,
            )
            .unwrap();
        assert_eq!(outcome.region, MapRegion::Canary);
        assert_eq!(outcome.camera_focus.x, -10.0);
    }

    #[test]
    fn absent_province_shows_nothing_without_error() {
        let catalog = test_catalog();
        let mut world = build_world(&catalog);
        let projection = test_projection();
        let mut controller = SelectionController::new();

        // Sevilla exists in geography but not in election 1's rows.
        let outcome = controller
            .select(
                SelectContext {
                    world: &mut world,
                    catalog: &catalog,
                    projection: &projection,
                    map_region: MapRegion::Mainland,
                },
                1,
                ProvinceFilter::Province("Sevilla".into()),
            )
            .unwrap();
        assert_eq!(outcome.shown, 0);
        assert_eq!(visible_count(&world), 0);
        assert!(outcome.palette.is_empty());
    }

    #[test]
    fn unloaded_election_fails_before_mutating_visibility() {
        let catalog = test_catalog();
        let mut world = build_world(&catalog);
        let projection = test_projection();
        let mut controller = SelectionController::new();

        controller
            .select(
                SelectContext {
                    world: &mut world,
                    catalog: &catalog,
                    projection: &projection,
                    map_region: MapRegion::Mainland,
                },
                0,
                ProvinceFilter::All,
            )
            .unwrap();
        let before = visible_count(&world);

        let err = controller
            .select(
                SelectContext {
                    world: &mut world,
                    catalog: &catalog,
                    projection: &projection,
                    map_region: MapRegion::Mainland,
                },
                7,
                ProvinceFilter::All,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            SelectError::Catalog(CatalogError::ElectionNotLoaded(7))
        ));
        assert_eq!(visible_count(&world), before);
        assert_eq!(controller.selection().unwrap().election, 0);
    }
}
