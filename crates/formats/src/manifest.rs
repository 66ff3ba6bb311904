use serde::{Deserialize, Serialize};

pub const MANIFEST_VERSION: &str = "1.0";
/// File name of the dataset manifest inside a data directory.
pub const MANIFEST_FILE: &str = "dataset.json";

/// Index of a dataset's input files.
///
/// Replaces hard-coded election lists: one entry per election, in
/// chronological order, plus the shared geography file and the two map
/// textures whose pixel dimensions drive plane extent resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetManifest {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path of the geography file, relative to the manifest.
    pub geography: String,
    pub maps: MapTextures,
    pub elections: Vec<ElectionEntry>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapTextures {
    pub mainland: TextureDims,
    pub canary: TextureDims,
}

/// Pixel dimensions of a map plane's texture image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureDims {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElectionEntry {
    /// Short id, e.g. "1977" or "04_2019".
    pub id: String,
    /// Display label for selectors and result titles, e.g. "Junio de 1977".
    pub label: String,
    /// Path of the results file, relative to the manifest.
    pub results: String,
    /// Path of the colors file, relative to the manifest.
    pub colors: String,
}

impl DatasetManifest {
    pub fn new(geography: impl Into<String>, maps: MapTextures) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            name: None,
            geography: geography.into(),
            maps,
            elections: Vec::new(),
        }
    }
}
