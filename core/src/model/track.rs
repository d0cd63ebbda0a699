use serde::{Deserialize, Serialize};

/// Operator-authored synthetic track. Locally owned for the lifetime of
/// the session; the complete list is mirrored to the server on every
/// mutation so the simulator can fold it into later snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomTrack {
    pub track_id: u32,
    pub platform_id: u32,
    pub profile_name: String,
    pub range_m: f64,
    pub azimuth_deg: f64,
    pub heading_deg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_serializes_push_body_fields() {
        let track = CustomTrack {
            track_id: 4,
            platform_id: 2,
            profile_name: "transit".into(),
            range_m: 50_000.0,
            azimuth_deg: 45.0,
            heading_deg: 180.0,
        };
        let body = serde_json::to_value(&track).unwrap();
        assert_eq!(body["track_id"], 4);
        assert_eq!(body["profile_name"], "transit");
        assert_eq!(body["heading_deg"], 180.0);
    }
}
