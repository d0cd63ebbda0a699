use serde::{Deserialize, Serialize};

/// Simulated target position, sensor-centered Cartesian meters. Owned by
/// the server; the client only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Target {
    pub target_id: String,
    pub x_m: f64,
    pub y_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Polar {
    pub range_m: f64,
    pub azimuth_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Cartesian {
    pub x_m: f64,
    pub y_m: f64,
}

/// CAT 048 plot record, display-only. `raw_hex` carries the encoded
/// record as served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AsterixRecord {
    pub target_id: String,
    pub track_number: u32,
    pub polar: Polar,
    pub cartesian: Cartesian,
    pub rcs_m2: Option<f64>,
    pub time_of_day_s: Option<f64>,
    pub raw_hex: Option<String>,
}

/// Server-side echo of an injected track, folded into the snapshot after
/// a custom-track push. Display-only; never read back into the locally
/// owned list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CustomTarget {
    pub track_id: u32,
    pub x_m: f64,
    pub y_m: f64,
    pub range_m: f64,
    pub azimuth_deg: f64,
    pub rcs_m2: Option<f64>,
    pub time_of_day_s: Option<f64>,
    pub raw_hex: Option<String>,
}

/// Authoritative server state. Replaced wholesale on every poll; there
/// are no partial or delta updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Snapshot {
    pub frame_index: u64,
    pub motion_enabled: bool,
    pub targets: Vec<Target>,
    pub asterix48: Vec<AsterixRecord>,
    pub custom_targets: Vec<CustomTarget>,
}

impl Snapshot {
    /// Simulated targets plus server-echoed custom targets.
    pub fn total_targets(&self) -> usize {
        self.targets.len() + self.custom_targets.len()
    }
}
