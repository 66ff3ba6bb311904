use foundation::math::MapRegion;

use crate::selection::ALL_LABEL;

/// Widget-model for the control panel.
///
/// Mirrors the GUI: a map-region selector (hidden while a province is
/// selected), an election selector by display label, a province selector
/// with the `Todas` sentinel appended last, and a background toggle. Pure
/// state; the app binary translates its input surface into these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    map_region: MapRegion,
    map_selector_visible: bool,
    election_label: String,
    province_label: String,
    background_enabled: bool,
    election_labels: Vec<String>,
    province_options: Vec<String>,
}

impl ControlPanel {
    pub fn new(election_labels: Vec<String>, provinces: Vec<String>) -> Self {
        let election_label = election_labels.first().cloned().unwrap_or_default();
        let mut province_options = provinces;
        province_options.push(ALL_LABEL.to_string());
        Self {
            map_region: MapRegion::Mainland,
            map_selector_visible: true,
            election_label,
            province_label: ALL_LABEL.to_string(),
            background_enabled: true,
            election_labels,
            province_options,
        }
    }

    pub fn map_region(&self) -> MapRegion {
        self.map_region
    }

    pub fn set_map_region(&mut self, region: MapRegion) {
        self.map_region = region;
    }

    pub fn map_selector_visible(&self) -> bool {
        self.map_selector_visible
    }

    pub fn show_map_selector(&mut self) {
        self.map_selector_visible = true;
    }

    pub fn hide_map_selector(&mut self) {
        self.map_selector_visible = false;
    }

    pub fn election_label(&self) -> &str {
        &self.election_label
    }

    pub fn set_election_label(&mut self, label: impl Into<String>) {
        self.election_label = label.into();
    }

    pub fn province_label(&self) -> &str {
        &self.province_label
    }

    pub fn set_province_label(&mut self, label: impl Into<String>) {
        self.province_label = label.into();
    }

    pub fn background_enabled(&self) -> bool {
        self.background_enabled
    }

    pub fn set_background_enabled(&mut self, enabled: bool) {
        self.background_enabled = enabled;
    }

    pub fn election_labels(&self) -> &[String] {
        &self.election_labels
    }

    /// Province names plus the trailing `Todas` sentinel.
    pub fn province_options(&self) -> &[String] {
        &self.province_options
    }
}

#[cfg(test)]
mod tests {
    use super::ControlPanel;
    use crate::selection::ALL_LABEL;
    use foundation::math::MapRegion;

    #[test]
    fn todas_is_appended_to_province_options() {
        let panel = ControlPanel::new(
            vec!["Junio de 1977".into()],
            vec!["Burgos".into(), "Madrid".into()],
        );
        assert_eq!(panel.province_options().last().map(String::as_str), Some(ALL_LABEL));
        assert_eq!(panel.province_options().len(), 3);
        assert_eq!(panel.province_label(), ALL_LABEL);
        assert_eq!(panel.election_label(), "Junio de 1977");
    }

    #[test]
    fn map_selector_starts_visible_on_mainland() {
        let panel = ControlPanel::new(vec![], vec![]);
        assert!(panel.map_selector_visible());
        assert_eq!(panel.map_region(), MapRegion::Mainland);
    }
}
