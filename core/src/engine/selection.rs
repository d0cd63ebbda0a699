use crate::model::{Platform, Profile};

/// Pending authoring state: the platform/profile selection plus the raw
/// numeric inputs captured by value when the next track is added.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackForm {
    pub platform_id: Option<u32>,
    pub profile_name: String,
    pub range_input: String,
    pub azimuth_input: String,
    pub heading_input: String,
}

impl Default for TrackForm {
    fn default() -> Self {
        Self {
            platform_id: None,
            profile_name: String::new(),
            range_input: "50000".into(),
            azimuth_input: "0".into(),
            heading_input: "0".into(),
        }
    }
}

impl TrackForm {
    /// Seeds the selection to the first platform and its first profile,
    /// when the catalog has any. A failed catalog load leaves the
    /// selection unset.
    pub fn seed_from_catalog(&mut self, platforms: &[Platform]) {
        if let Some(first) = platforms.first() {
            self.platform_id = Some(first.id);
            self.profile_name = first
                .profiles
                .first()
                .map(|profile| profile.profile_name.clone())
                .unwrap_or_default();
        }
    }

    /// Switches platform. The chosen profile resets to the new
    /// platform's first profile when the previous one is not offered
    /// there.
    pub fn select_platform(&mut self, platform_id: u32, platforms: &[Platform]) {
        self.platform_id = Some(platform_id);
        let offered = self.available_profiles(platforms);
        if !offered
            .iter()
            .any(|profile| profile.profile_name == self.profile_name)
        {
            self.profile_name = offered
                .first()
                .map(|profile| profile.profile_name.clone())
                .unwrap_or_default();
        }
    }

    pub fn select_profile(&mut self, profile_name: String) {
        self.profile_name = profile_name;
    }

    /// Profiles offered by the selected platform; a pure function of
    /// (catalog, selected id), empty when either side is missing.
    pub fn available_profiles<'a>(&self, platforms: &'a [Platform]) -> &'a [Profile] {
        self.platform_id
            .and_then(|id| platforms.iter().find(|platform| platform.id == id))
            .map(|platform| platform.profiles.as_slice())
            .unwrap_or(&[])
    }

    pub fn range_m(&self) -> f64 {
        parse_or_zero(&self.range_input)
    }

    pub fn azimuth_deg(&self) -> f64 {
        parse_or_zero(&self.azimuth_input)
    }

    pub fn heading_deg(&self) -> f64 {
        parse_or_zero(&self.heading_input)
    }
}

// Unparseable input captures as 0.0; authoring never aborts on a typo.
fn parse_or_zero(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}
