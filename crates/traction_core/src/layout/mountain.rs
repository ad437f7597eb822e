//! Trapezoid-tier geometry for the mountain progress view.
//!
//! # Responsibility
//! - Map an ordered task list onto stacked trapezoid bands that narrow
//!   toward a flattened peak, ready for SVG rendering.
//!
//! # Invariants
//! - At most `max_display` tiers are emitted; the remainder is reported as an
//!   overflow count, never silently dropped.
//! - The apex never collapses to a point: tier widths shrink by at most the
//!   configured factor, which is strictly below 1.
//! - Tier colors cycle the fixed six-entry palette in input order.

use serde::Serialize;

use crate::model::task::Task;

/// Fill palette cycled by tier index. Order matters for visual parity; the
/// exact hex values are presentation defaults the UI may restyle.
pub const TIER_PALETTE: [&str; 6] = [
    "#4f8df7", "#34c38f", "#f7b84b", "#f1556c", "#9b6df2", "#45c5e0",
];

/// Opacity applied to tiers whose task is not done yet.
pub const DIMMED_TIER_OPACITY: f64 = 0.4;

/// Geometry knobs for one mountain rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountainConfig {
    /// Maximum number of tiers drawn before overflow reporting starts.
    pub max_display: usize,
    /// Fraction of the half-width lost between base and apex; below 1 so the
    /// peak stays a visible plateau.
    pub shrink_factor: f64,
    /// Y coordinate of the mountain base, in SVG user units.
    pub base_y: f64,
    /// Y coordinate of the apex plateau.
    pub apex_y: f64,
    /// Half the width of the lowest band.
    pub max_half_width: f64,
}

impl MountainConfig {
    /// Full-page layout: up to 15 tiers.
    pub const FULL: Self = Self {
        max_display: 15,
        shrink_factor: 0.95,
        base_y: 280.0,
        apex_y: 40.0,
        max_half_width: 150.0,
    };

    /// Sidebar/card layout: up to 5 tiers.
    pub const COMPACT: Self = Self {
        max_display: 5,
        shrink_factor: 0.9,
        base_y: 120.0,
        apex_y: 20.0,
        max_half_width: 70.0,
    };
}

/// One trapezoid band of the mountain, bottom-to-top in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountainTier {
    /// Zero-based position counted from the base.
    pub index: usize,
    /// Task title rendered as the tier label.
    pub title: String,
    /// Full width of the band's upper edge.
    pub width_top: f64,
    /// Full width of the band's lower edge.
    pub width_bottom: f64,
    /// Y coordinate of the upper edge.
    pub y_top: f64,
    /// Y coordinate of the lower edge.
    pub y_bottom: f64,
    /// Vertical midline where the label is anchored.
    pub label_y: f64,
    /// Palette slot, `index % TIER_PALETTE.len()`.
    pub color_index: usize,
    /// Whether the underlying task is done.
    pub done: bool,
    /// 1.0 for done tiers, [`DIMMED_TIER_OPACITY`] otherwise.
    pub opacity: f64,
}

/// Complete mountain rendering input for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountainView {
    /// Bands to draw, base first. Empty when the project has no tasks; the
    /// UI shows its empty-state message instead of an empty mountain.
    pub tiers: Vec<MountainTier>,
    /// Tasks beyond `max_display` that are summarized, not drawn.
    pub overflow_count: usize,
    /// Set when every input task is done and at least one exists.
    pub show_summit_marker: bool,
}

/// Width of the mountain silhouette at height `y`.
///
/// Linear interpolation between the base width and the shrunken apex width:
/// `half_width(y) = max_half_width * (1 - ratio * shrink_factor)` with
/// `ratio = (base_y - y) / (base_y - apex_y)`.
fn half_width_at(config: &MountainConfig, y: f64) -> f64 {
    let ratio = (config.base_y - y) / (config.base_y - config.apex_y);
    config.max_half_width * (1.0 - ratio * config.shrink_factor)
}

/// Lays out an ordered task list as stacked mountain tiers.
///
/// Rules:
/// - The list is truncated to `max_display` entries; `overflow_count` is the
///   remainder.
/// - Tier `i` occupies the `i`-th equal-height band above the base, so the
///   first task forms the widest tier and later tasks climb toward the apex.
/// - The summit marker reflects the whole input list, truncated or not.
pub fn layout_tiers(tasks: &[Task], config: &MountainConfig) -> MountainView {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.done).count();
    let displayed = total.min(config.max_display);
    let overflow_count = total - displayed;

    let mut tiers = Vec::with_capacity(displayed);
    if displayed > 0 {
        let band_height = (config.base_y - config.apex_y) / displayed as f64;
        for (index, task) in tasks.iter().take(displayed).enumerate() {
            let y_bottom = config.base_y - band_height * index as f64;
            let y_top = y_bottom - band_height;
            tiers.push(MountainTier {
                index,
                title: task.title.clone(),
                width_top: 2.0 * half_width_at(config, y_top),
                width_bottom: 2.0 * half_width_at(config, y_bottom),
                y_top,
                y_bottom,
                label_y: (y_top + y_bottom) / 2.0,
                color_index: index % TIER_PALETTE.len(),
                done: task.done,
                opacity: if task.done { 1.0 } else { DIMMED_TIER_OPACITY },
            });
        }
    }

    MountainView {
        tiers,
        overflow_count,
        show_summit_marker: total > 0 && completed == total,
    }
}

#[cfg(test)]
mod tests {
    use super::{layout_tiers, MountainConfig, DIMMED_TIER_OPACITY, TIER_PALETTE};
    use crate::model::task::Task;

    fn tasks(count: usize, done: bool) -> Vec<Task> {
        (0..count)
            .map(|index| {
                let mut task = Task::new(format!("step {index}"));
                task.done = done;
                task
            })
            .collect()
    }

    #[test]
    fn empty_task_list_yields_the_empty_view() {
        let view = layout_tiers(&[], &MountainConfig::FULL);
        assert!(view.tiers.is_empty());
        assert_eq!(view.overflow_count, 0);
        assert!(!view.show_summit_marker);
    }

    #[test]
    fn overflow_beyond_max_display_is_counted() {
        let view = layout_tiers(&tasks(20, false), &MountainConfig::FULL);
        assert_eq!(view.tiers.len(), 15);
        assert_eq!(view.overflow_count, 5);
    }

    #[test]
    fn tiers_narrow_monotonically_toward_the_apex() {
        let view = layout_tiers(&tasks(5, false), &MountainConfig::COMPACT);
        for tier in &view.tiers {
            assert!(tier.width_bottom > tier.width_top);
        }
        for pair in view.tiers.windows(2) {
            assert!(pair[1].width_bottom <= pair[0].width_bottom);
            // Adjacent bands share an edge.
            assert!((pair[1].width_bottom - pair[0].width_top).abs() < 1e-9);
            assert!((pair[1].y_bottom - pair[0].y_top).abs() < 1e-9);
        }
    }

    #[test]
    fn apex_keeps_a_visible_plateau() {
        let config = MountainConfig::FULL;
        let view = layout_tiers(&tasks(15, false), &config);
        let top = view.tiers.last().expect("tiers exist");
        let plateau = 2.0 * config.max_half_width * (1.0 - config.shrink_factor);
        assert!((top.width_top - plateau).abs() < 1e-9);
        assert!(top.width_top > 0.0);
    }

    #[test]
    fn palette_cycles_every_six_tiers() {
        let view = layout_tiers(&tasks(8, false), &MountainConfig::FULL);
        let colors: Vec<usize> = view.tiers.iter().map(|tier| tier.color_index).collect();
        assert_eq!(colors, vec![0, 1, 2, 3, 4, 5, 0, 1]);
        assert_eq!(TIER_PALETTE.len(), 6);
    }

    #[test]
    fn open_tiers_are_dimmed_and_done_tiers_are_opaque() {
        let mut mixed = tasks(2, false);
        mixed[0].done = true;
        let view = layout_tiers(&mixed, &MountainConfig::COMPACT);
        assert_eq!(view.tiers[0].opacity, 1.0);
        assert_eq!(view.tiers[1].opacity, DIMMED_TIER_OPACITY);
        assert!(!view.show_summit_marker);
    }

    #[test]
    fn summit_marker_reflects_the_full_list() {
        let all_done = layout_tiers(&tasks(20, true), &MountainConfig::FULL);
        assert!(all_done.show_summit_marker);

        // One undone task beyond the display cutoff still blocks the marker.
        let mut almost = tasks(20, true);
        almost[19].done = false;
        let view = layout_tiers(&almost, &MountainConfig::FULL);
        assert!(!view.show_summit_marker);
    }
}
