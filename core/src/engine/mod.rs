pub mod motion;
pub mod selection;
pub mod sync;
pub mod tracks;

pub use motion::MotionSwitch;
pub use selection::TrackForm;
pub use sync::SyncEngine;
pub use tracks::{TrackIdAllocator, TrackManager};
