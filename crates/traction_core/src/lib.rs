//! Core computation logic for the Traction dashboard.
//! This crate is the single source of truth for derived-progress invariants.

pub mod layout;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod service;
pub mod snapshot;

pub use layout::mountain::{
    layout_tiers, MountainConfig, MountainTier, MountainView, DIMMED_TIER_OPACITY, TIER_PALETTE,
};
pub use layout::timeline::{layout_bar, TimelineBar, TimelineWindow, MIN_BAR_WIDTH_PCT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use metrics::deadline::{days_until, deadline_label, deadline_status, DeadlineStatus};
pub use metrics::progress::{task_progress, ProgressSummary};
pub use metrics::time_progress::{
    classify_pacing, time_progress, Pacing, TimeProgress, PACING_SLACK_POINTS,
};
pub use model::project::{Priority, Project, ProjectId, ProjectStatus};
pub use model::task::{Task, TaskId};
pub use service::dashboard_service::{DashboardService, ProgressSource, ProjectCard, TimelineRow};
pub use snapshot::{decode_snapshot, load_snapshot_file, Snapshot, SnapshotError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
