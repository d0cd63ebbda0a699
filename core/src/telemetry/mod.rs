pub mod log;
pub mod metrics;

pub use log::SyncLog;
pub use metrics::SyncMetrics;
