pub mod catalog;
pub mod config;
pub mod snapshot;
pub mod track;

pub use catalog::{Platform, PlatformCatalog, Profile};
pub use config::SensorConfig;
pub use snapshot::{AsterixRecord, Cartesian, CustomTarget, Polar, Snapshot, Target};
pub use track::CustomTrack;
