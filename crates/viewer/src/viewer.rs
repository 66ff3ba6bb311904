use catalog::{CatalogError, ElectionCatalog};
use foundation::math::{MapProjection, MapRegion, Vec3};
use gpu::{Camera3D, RenderFrame, Renderer};
use layers::map_planes::{MapPlaneLayer, TextureSize};
use layers::seat_stacks::{BuildError, SeatStackLayer};
use runtime::{DEFAULT_DT_S, EventBus, Frame, KIND_BACKGROUND, KIND_DATASET, KIND_SELECTION};
use scene::World;

use crate::background::BackgroundState;
use crate::controller::{SelectContext, SelectError, SelectionController};
use crate::controls::ControlPanel;
use crate::info::{InfoBoard, InfoCard};
use crate::selection::ProvinceFilter;

const CAMERA_FOV_Y_RAD: f64 = 75.0 * std::f64::consts::PI / 180.0;
const CAMERA_NEAR: f64 = 0.1;
const CAMERA_FAR: f64 = 1000.0;
/// Initial camera distance from the map plane.
const CAMERA_DISTANCE: f64 = 5.0;

#[derive(Debug)]
pub enum ViewerError {
    /// A map texture was never resolved, so nothing can be projected.
    TexturesUnresolved,
    /// The dataset loaded no election at all.
    NoElections,
    Catalog(CatalogError),
    Build(BuildError),
    /// Election selector label that matches no loaded election.
    UnknownElectionLabel(String),
    Select(SelectError),
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerError::TexturesUnresolved => {
                write!(f, "map plane textures are not resolved")
            }
            ViewerError::NoElections => write!(f, "dataset contains no loaded election"),
            ViewerError::Catalog(e) => write!(f, "{e}"),
            ViewerError::Build(e) => write!(f, "{e}"),
            ViewerError::UnknownElectionLabel(label) => {
                write!(f, "unknown election label: {label}")
            }
            ViewerError::Select(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ViewerError {}

impl From<CatalogError> for ViewerError {
    fn from(e: CatalogError) -> Self {
        ViewerError::Catalog(e)
    }
}

impl From<BuildError> for ViewerError {
    fn from(e: BuildError) -> Self {
        ViewerError::Build(e)
    }
}

impl From<SelectError> for ViewerError {
    fn from(e: SelectError) -> Self {
        ViewerError::Select(e)
    }
}

/// The assembled viewer: scene, catalog, layers, controller and the
/// presentation-facing state, wired the way the GUI callbacks expect.
///
/// Construction runs the full startup sequence: resolve both map textures,
/// spawn the planes, build every loaded election's geometry hidden, build
/// the info board, then select the first loaded election with the `Todas`
/// filter.
pub struct Viewer {
    world: World,
    catalog: ElectionCatalog,
    planes: MapPlaneLayer,
    projection: MapProjection,
    board: InfoBoard,
    background: BackgroundState,
    controls: ControlPanel,
    controller: SelectionController,
    camera_focus: Vec3,
    bus: EventBus,
    frame: Frame,
}

impl Viewer {
    pub fn new(
        catalog: ElectionCatalog,
        mainland_texture: TextureSize,
        canary_texture: TextureSize,
    ) -> Result<Self, ViewerError> {
        let mut world = World::new();

        let mut planes = MapPlaneLayer::new(0);
        planes.resolve_texture(&mut world, MapRegion::Mainland, mainland_texture);
        planes.resolve_texture(&mut world, MapRegion::Canary, canary_texture);
        planes.spawn_planes(&mut world);
        let projection = planes.projection().ok_or(ViewerError::TexturesUnresolved)?;

        let stacks = SeatStackLayer::new(1);
        let loaded = catalog.loaded_elections();
        let first = *loaded.first().ok_or(ViewerError::NoElections)?;
        for &index in &loaded {
            stacks.build_election(&mut world, &catalog, &projection, catalog.election(index)?)?;
        }

        let board = InfoBoard::build(&catalog)?;

        let mut labels = Vec::with_capacity(loaded.len());
        for &index in &loaded {
            labels.push(catalog.label(index)?.to_string());
        }
        let provinces = catalog
            .provinces()
            .into_iter()
            .map(str::to_string)
            .collect();
        let controls = ControlPanel::new(labels, provinces);

        let mut viewer = Self {
            world,
            catalog,
            planes,
            projection,
            board,
            background: BackgroundState::new(),
            controls,
            controller: SelectionController::new(),
            camera_focus: Vec3::new(0.0, 0.0, 0.0),
            bus: EventBus::new(),
            frame: Frame::new(0, DEFAULT_DT_S),
        };
        viewer.bus.emit(
            viewer.frame,
            KIND_DATASET,
            format!(
                "{} elections, {} provinces",
                loaded.len(),
                viewer.catalog.provinces().len()
            ),
        );
        viewer.apply_selection(first, ProvinceFilter::All)?;
        Ok(viewer)
    }

    /// Election selector callback.
    pub fn select_election(&mut self, index: usize) -> Result<(), ViewerError> {
        let filter = self
            .controller
            .selection()
            .map(|s| s.filter.clone())
            .unwrap_or(ProvinceFilter::All);
        self.apply_selection(index, filter)?;
        let label = self.catalog.label(index)?.to_string();
        self.controls.set_election_label(label);
        Ok(())
    }

    pub fn select_election_by_label(&mut self, label: &str) -> Result<(), ViewerError> {
        let index = self
            .catalog
            .loaded_elections()
            .into_iter()
            .find(|&i| self.catalog.label(i).is_ok_and(|l| l == label))
            .ok_or_else(|| ViewerError::UnknownElectionLabel(label.to_string()))?;
        self.select_election(index)
    }

    /// Province selector callback.
    ///
    /// `Todas` re-shows the map-region selector and resets it to the
    /// mainland; a province hides the selector (its region is auto-detected
    /// from the province's coordinates).
    pub fn select_province(&mut self, filter: ProvinceFilter) -> Result<(), ViewerError> {
        let election = self
            .controller
            .selection()
            .map(|s| s.election)
            .unwrap_or(0);

        match &filter {
            ProvinceFilter::All => {
                self.controls.show_map_selector();
                self.controls.set_map_region(MapRegion::Mainland);
            }
            ProvinceFilter::Province(_) => self.controls.hide_map_selector(),
        }
        let label = filter.label().to_string();
        self.apply_selection(election, filter)?;
        self.controls.set_province_label(label);
        Ok(())
    }

    /// Map selector callback. Ignored while a province is selected (the
    /// selector is hidden then).
    pub fn select_map_region(&mut self, region: MapRegion) {
        if !self.controls.map_selector_visible() {
            return;
        }
        self.controls.set_map_region(region);
        let origin = self.projection.region_origin(region);
        self.camera_focus = Vec3::new(origin.x, origin.y, 0.0);
    }

    /// Background toggle callback.
    pub fn set_background_enabled(&mut self, enabled: bool) {
        self.background.enabled = enabled;
        self.controls.set_background_enabled(enabled);
        self.bus.emit(
            self.frame,
            KIND_BACKGROUND,
            if enabled { "enabled" } else { "disabled" },
        );
    }

    /// Advance one frame and collect its draw commands.
    ///
    /// Read-only with respect to selection state: the loop only re-targets
    /// the camera at the current focus and redraws.
    pub fn tick(&mut self) -> RenderFrame {
        self.frame = self.frame.next();
        let camera = Camera3D::look_at(
            self.camera_focus + Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            self.camera_focus,
            CAMERA_FOV_Y_RAD,
            CAMERA_NEAR,
            CAMERA_FAR,
        );
        Renderer::collect(&self.world, camera, self.background.color_at(self.frame.time))
    }

    /// The card currently on display: national aggregate for `Todas`, the
    /// province card otherwise (`None` when the province has no row in the
    /// selected election).
    pub fn current_card(&self) -> Option<&InfoCard> {
        let selection = self.controller.selection()?;
        match &selection.filter {
            ProvinceFilter::All => self.board.national(selection.election),
            ProvinceFilter::Province(name) => self.board.provincial(selection.election, name),
        }
    }

    pub fn selection(&self) -> Option<&crate::selection::Selection> {
        self.controller.selection()
    }

    pub fn camera_focus(&self) -> Vec3 {
        self.camera_focus
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn catalog(&self) -> &ElectionCatalog {
        &self.catalog
    }

    pub fn background(&self) -> &BackgroundState {
        &self.background
    }

    pub fn planes(&self) -> &MapPlaneLayer {
        &self.planes
    }

    pub fn drain_events(&mut self) -> Vec<runtime::Event> {
        self.bus.drain()
    }

    fn apply_selection(&mut self, election: usize, filter: ProvinceFilter) -> Result<(), ViewerError> {
        let outcome = self.controller.select(
            SelectContext {
                world: &mut self.world,
                catalog: &self.catalog,
                projection: &self.projection,
                map_region: self.controls.map_region(),
            },
            election,
            filter.clone(),
        )?;

        self.camera_focus = outcome.camera_focus;
        self.background.set_palette(outcome.palette);
        self.bus.emit(
            self.frame,
            KIND_SELECTION,
            format!(
                "election {election}, province {}: {} boxes visible",
                filter.label(),
                outcome.shown
            ),
        );
        Ok(())
    }
}
