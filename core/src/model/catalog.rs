use serde::{Deserialize, Serialize};

/// Named generation behavior offered by a platform. The profile name is
/// the string key the server uses when synthesizing the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: u32,
    pub profile_name: String,
}

/// Read-only catalog entry. The backend serves more columns (category,
/// role, source URL); serde drops what the client never reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// Wrapper for the `{ "platforms": [...] }` catalog response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformCatalog {
    #[serde(default)]
    pub platforms: Vec<Platform>,
}
