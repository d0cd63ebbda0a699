//! Client-side engine for the Phoenix radar operator dashboard.
//!
//! Keeps a local view consistent with the authoritative simulator
//! snapshot, projects sensor-centered coordinates into normalized scope
//! space, and owns the operator-authored custom track list that is
//! mirrored to the server on every change.

pub mod engine;
pub mod error;
pub mod model;
pub mod projection;
pub mod telemetry;

pub use engine::{MotionSwitch, SyncEngine, TrackForm, TrackManager};
pub use error::FetchError;
