use serde::{Deserialize, Serialize};

/// Fallback display range when the config never loaded or omits it.
pub const DEFAULT_MAX_RANGE_KM: f64 = 240.0;

/// Static sensor parameters, retrieved once at startup and replaced
/// wholesale on reload. Fields the backend omits stay `None` and render
/// as placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SensorConfig {
    pub prf_hz: Option<u32>,
    pub max_range_km: Option<f64>,
    pub sector_step_deg: Option<f64>,
    pub targets_per_sector: Option<u32>,
    pub rcs_m2_range: Option<(f64, f64)>,
    pub motion_enabled: bool,
}

impl SensorConfig {
    /// Maximum display range in meters, falling back to 240 km.
    pub fn max_range_m(&self) -> f64 {
        self.max_range_km.unwrap_or(DEFAULT_MAX_RANGE_KM) * 1000.0
    }
}
