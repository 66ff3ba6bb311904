use std::fs;
use std::path::{Path, PathBuf};

use catalog::ElectionCatalog;

use crate::colors::parse_party_colors;
use crate::geography::parse_geography;
use crate::manifest::{DatasetManifest, MANIFEST_FILE, MapTextures};
use crate::results::parse_election_results;

/// Fatal loader error: without a readable manifest there is no dataset.
#[derive(Debug)]
pub enum DatasetError {
    ManifestIo {
        path: PathBuf,
        source: std::io::Error,
    },
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::ManifestIo { path, source } => {
                write!(f, "failed to read manifest {}: {source}", path.display())
            }
            DatasetError::ManifestParse { path, source } => {
                write!(f, "failed to parse manifest {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// Per-file load outcome. Failed files degrade: loading continues and the
/// affected election slot simply stays absent from the catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<FailedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub path: String,
    pub error: String,
}

impl LoadReport {
    fn ok(&mut self, path: &Path) {
        self.loaded.push(path.display().to_string());
    }

    fn fail(&mut self, path: &Path, error: impl std::fmt::Display) {
        self.failed.push(FailedFile {
            path: path.display().to_string(),
            error: error.to_string(),
        });
    }
}

#[derive(Debug)]
pub struct LoadedDataset {
    pub catalog: ElectionCatalog,
    pub maps: MapTextures,
    /// Manifest display name, if any.
    pub name: Option<String>,
    pub report: LoadReport,
}

/// Load a dataset directory into a catalog.
///
/// Files load sequentially, one after another, in manifest order. An
/// election is stored only when both its results and colors files parse;
/// either failing leaves the slot absent. A failed geography file leaves the
/// catalog without coordinates (every later lookup reports the unknown
/// province).
pub fn load_dataset_from_dir(root: impl AsRef<Path>) -> Result<LoadedDataset, DatasetError> {
    let root = root.as_ref();
    let manifest_path = root.join(MANIFEST_FILE);
    let manifest_raw = fs::read_to_string(&manifest_path).map_err(|e| DatasetError::ManifestIo {
        path: manifest_path.clone(),
        source: e,
    })?;
    let manifest: DatasetManifest =
        serde_json::from_str(&manifest_raw).map_err(|e| DatasetError::ManifestParse {
            path: manifest_path.clone(),
            source: e,
        })?;

    let mut catalog = ElectionCatalog::new();
    let mut report = LoadReport::default();

    for (index, entry) in manifest.elections.iter().enumerate() {
        let results_path = root.join(&entry.results);
        let record = match fs::read_to_string(&results_path) {
            Ok(content) => match parse_election_results(&content, index) {
                Ok(record) => {
                    report.ok(&results_path);
                    record
                }
                Err(e) => {
                    report.fail(&results_path, e);
                    continue;
                }
            },
            Err(e) => {
                report.fail(&results_path, e);
                continue;
            }
        };

        let colors_path = root.join(&entry.colors);
        let colors = match fs::read_to_string(&colors_path) {
            Ok(content) => match parse_party_colors(&content) {
                Ok(colors) => {
                    report.ok(&colors_path);
                    colors
                }
                Err(e) => {
                    report.fail(&colors_path, e);
                    continue;
                }
            },
            Err(e) => {
                report.fail(&colors_path, e);
                continue;
            }
        };

        catalog.insert_election(record, colors, entry.label.clone());
    }

    let geography_path = root.join(&manifest.geography);
    match fs::read_to_string(&geography_path) {
        Ok(content) => match parse_geography(&content) {
            Ok(records) => {
                report.ok(&geography_path);
                catalog.insert_geography(records);
            }
            Err(e) => report.fail(&geography_path, e),
        },
        Err(e) => report.fail(&geography_path, e),
    }

    Ok(LoadedDataset {
        catalog,
        maps: manifest.maps,
        name: manifest.name,
        report,
    })
}
