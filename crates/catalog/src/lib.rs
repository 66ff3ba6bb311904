use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One province's seat counts, aligned with the election's `headers[1..]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceRow {
    pub province: String,
    pub seats: Vec<u32>,
}

/// The national totals row at the end of a results file. Not a province row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsRow {
    pub label: String,
    pub seats: Vec<u32>,
}

/// One parliamentary election's parsed results.
///
/// `headers[0]` is the province column label; `headers[1..]` are party
/// names, positionally aligned with every row's `seats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionRecord {
    pub index: usize,
    pub headers: Vec<String>,
    pub results: Vec<ProvinceRow>,
    pub totals: TotalsRow,
}

impl ElectionRecord {
    /// Party name for seat position `party` (0-based over `seats`).
    pub fn party_name(&self, party: usize) -> Option<&str> {
        self.headers.get(party + 1).map(String::as_str)
    }

    pub fn province_row(&self, province: &str) -> Option<&ProvinceRow> {
        self.results.iter().find(|r| r.province == province)
    }
}

/// A province's geographic position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A party's display color, stored as the raw file string.
///
/// Raw colors carry a legacy 2-character prefix (e.g. alpha) ahead of the six
/// RGB hex digits. The CSS form strips the prefix from the raw string itself,
/// never from a re-encoded integer: raw `"FF00FF00"` becomes `"#00FF00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyColor {
    raw: String,
}

impl PartyColor {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// CSS hex form: `#` plus the third character onward of the raw string.
    pub fn css(&self) -> String {
        format!("#{}", self.stripped())
    }

    /// Packed 0xRRGGBB value of the prefix-stripped digits.
    pub fn rgb(&self) -> Result<u32, CatalogError> {
        u32::from_str_radix(self.stripped(), 16)
            .map_err(|_| CatalogError::InvalidColor(self.raw.clone()))
    }

    fn stripped(&self) -> &str {
        self.raw.get(2..).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The slot for this election index was never loaded (or out of range).
    ElectionNotLoaded(usize),
    /// No geographic record under this province name.
    UnknownProvince(String),
    /// No color at this (election, party) position.
    ColorNotFound { election: usize, party: usize },
    /// Raw color string is not prefix + hex digits.
    InvalidColor(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::ElectionNotLoaded(index) => {
                write!(f, "election {index} is not loaded")
            }
            CatalogError::UnknownProvince(name) => write!(f, "unknown province: {name}"),
            CatalogError::ColorNotFound { election, party } => {
                write!(f, "no color for election {election}, party {party}")
            }
            CatalogError::InvalidColor(raw) => write!(f, "invalid color value: {raw}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone, PartialEq)]
struct ElectionSlot {
    record: ElectionRecord,
    colors: Vec<PartyColor>,
    label: String,
}

/// The data store: election records, geography and party colors.
///
/// Populated once at startup, immutable afterward. Slots for elections that
/// failed to load stay empty and every lookup against them reports
/// `ElectionNotLoaded` instead of propagating a silent absence.
#[derive(Debug, Default)]
pub struct ElectionCatalog {
    elections: Vec<Option<ElectionSlot>>,
    geo: BTreeMap<String, GeoRecord>,
}

impl ElectionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an election under its index, growing the slot table as needed.
    pub fn insert_election(
        &mut self,
        record: ElectionRecord,
        colors: Vec<PartyColor>,
        label: impl Into<String>,
    ) {
        let index = record.index;
        if self.elections.len() <= index {
            self.elections.resize(index + 1, None);
        }
        self.elections[index] = Some(ElectionSlot {
            record,
            colors,
            label: label.into(),
        });
    }

    pub fn insert_geography(&mut self, records: Vec<GeoRecord>) {
        for record in records {
            self.geo.insert(record.name.clone(), record);
        }
    }

    /// Number of election slots, loaded or not.
    pub fn election_count(&self) -> usize {
        self.elections.len()
    }

    /// Indices of the elections that actually loaded, ascending.
    pub fn loaded_elections(&self) -> Vec<usize> {
        self.elections
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| i))
            .collect()
    }

    pub fn election(&self, index: usize) -> Result<&ElectionRecord, CatalogError> {
        self.slot(index).map(|s| &s.record)
    }

    pub fn label(&self, index: usize) -> Result<&str, CatalogError> {
        self.slot(index).map(|s| s.label.as_str())
    }

    pub fn geo(&self, name: &str) -> Result<&GeoRecord, CatalogError> {
        self.geo
            .get(name)
            .ok_or_else(|| CatalogError::UnknownProvince(name.to_string()))
    }

    /// Color for the party at `headers[party + 1]` of the given election.
    pub fn color(&self, election: usize, party: usize) -> Result<&PartyColor, CatalogError> {
        let slot = self.slot(election)?;
        slot.colors
            .get(party)
            .ok_or(CatalogError::ColorNotFound { election, party })
    }

    /// Province names in deterministic (sorted) order.
    pub fn provinces(&self) -> Vec<&str> {
        self.geo.keys().map(String::as_str).collect()
    }

    fn slot(&self, index: usize) -> Result<&ElectionSlot, CatalogError> {
        self.elections
            .get(index)
            .and_then(|s| s.as_ref())
            .ok_or(CatalogError::ElectionNotLoaded(index))
    }
}
