//! Skill-gap analysis
//!
//! Compares a target course's full prerequisite path against the set of
//! courses a learner has already completed, producing the missing set in
//! study order, a progress percentage, and a short "study next" list.

use crate::core::models::{Catalog, Course, CourseId};
use crate::core::path::{build_path, LearningPath};
use serde::Serialize;
use std::collections::HashSet;

/// Default size of the "study next" suggestion list
pub const DEFAULT_NEXT_STEPS: usize = 3;

/// Result of a gap analysis for one target course
///
/// Serialized field names match the response payload shape used by the
/// HTTP boundary.
#[derive(Debug, Clone, Serialize)]
pub struct GapReport {
    /// The course the analysis was requested for
    pub target: Course,

    /// Ids of every course in the learning path (target excluded), ordered
    /// by earliest level then discovery order
    pub required_ids: Vec<CourseId>,

    /// Completed ids intersected with `required_ids`, in required order
    #[serde(rename = "completed_courses")]
    pub completed_ids: Vec<CourseId>,

    /// Required courses not yet completed, in level-then-discovery order so
    /// earlier-needed courses come first
    #[serde(rename = "missing_courses")]
    pub missing: Vec<Course>,

    /// `100 * |completed ∩ required| / |required|`, rounded to one decimal;
    /// 100.0 when nothing is required
    pub progress_percent: f64,

    /// Prefix of `missing` to study next (order preserved, not re-ranked)
    pub next_recommended: Vec<Course>,

    /// Number of missing courses
    pub total_missing: usize,

    /// Number of required courses
    pub total_required: usize,
}

/// Analyze the gap between `completed` and the prerequisites of `target_id`
///
/// Builds the learning path first; an absent target propagates as `None`.
/// Completed ids outside the requirement set are ignored.
#[must_use]
pub fn analyze_gap(
    catalog: &Catalog,
    target_id: CourseId,
    completed: &HashSet<CourseId>,
    max_depth: usize,
    next_steps: usize,
) -> Option<GapReport> {
    let path = build_path(catalog, target_id, max_depth)?;
    Some(gap_from_path(&path, completed, next_steps))
}

/// Compute a gap report from an already-built learning path
#[must_use]
pub fn gap_from_path(
    path: &LearningPath,
    completed: &HashSet<CourseId>,
    next_steps: usize,
) -> GapReport {
    let required_ids = path.required_ids();

    let completed_ids: Vec<CourseId> = required_ids
        .iter()
        .copied()
        .filter(|id| completed.contains(id))
        .collect();

    // flat_path is already in level-then-discovery order, so a single
    // filtered walk preserves prerequisite ordering.
    let missing: Vec<Course> = path
        .flat_path
        .iter()
        .filter(|c| !completed.contains(&c.id))
        .cloned()
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let progress_percent = if required_ids.is_empty() {
        100.0
    } else {
        let raw = 100.0 * completed_ids.len() as f64 / required_ids.len() as f64;
        (raw * 10.0).round() / 10.0
    };

    let next_recommended: Vec<Course> = missing.iter().take(next_steps).cloned().collect();

    GapReport {
        target: path.target.clone(),
        total_missing: missing.len(),
        total_required: required_ids.len(),
        required_ids,
        completed_ids,
        missing,
        progress_percent,
        next_recommended,
    }
}
