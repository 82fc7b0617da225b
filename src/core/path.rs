//! Prerequisite learning paths
//!
//! Builds a leveled learning path for a target course by expanding its
//! prerequisite relation breadth-first: level 0 holds the direct
//! prerequisites, level 1 the prerequisites of those, and so on. Courses
//! reachable through more than one chain are placed once, at the earliest
//! level, and a directed cycle anywhere in the traversed subgraph is
//! reported as a fact rather than an error.

use crate::core::models::{Catalog, Course, CourseId};
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

/// Safety cap on traversal depth for malformed or adversarially deep graphs
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// A leveled prerequisite path for one target course
///
/// Request-scoped and never persisted. `flat_path` is the concatenation of
/// `levels` in level order, so shared prerequisites are counted exactly once
/// in `total_hours`.
#[derive(Debug, Clone, Serialize)]
pub struct LearningPath {
    /// The course the path was requested for
    pub target: Course,

    /// Prerequisite levels: level 0 is the target's direct prerequisites,
    /// level 1 the prerequisites of level 0 not already placed, etc.
    /// Order within a level is discovery order.
    pub levels: Vec<Vec<Course>>,

    /// All distinct prerequisite courses ordered by earliest level, suitable
    /// for sequential study
    pub flat_path: Vec<Course>,

    /// Sum of `estimated_hours` over `flat_path`
    pub total_hours: f32,

    /// True when the prerequisite relation reachable from the target
    /// contains a directed cycle (a course depending on itself, directly or
    /// transitively). Shared dependencies are not cycles.
    pub cycle_detected: bool,
}

impl LearningPath {
    /// Ids of every course in the path, in `flat_path` order
    #[must_use]
    pub fn required_ids(&self) -> Vec<CourseId> {
        self.flat_path.iter().map(|c| c.id).collect()
    }

    /// Number of distinct prerequisite courses in the path
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.flat_path.len()
    }
}

/// Build the learning path for `target_id`
///
/// Returns `None` when the target is absent from the catalog. A target with
/// no prerequisites yields an empty path (`levels` and `flat_path` empty,
/// `total_hours` zero); callers must treat the two outcomes distinctly.
///
/// Frontier ids absent from the catalog are silently dropped; ids already
/// placed keep their earlier (shallower) placement. Expansion stops when a
/// frontier empties or after `max_depth` levels, whichever comes first; the
/// depth stop is quiet and does not by itself flag a cycle.
#[must_use]
pub fn build_path(catalog: &Catalog, target_id: CourseId, max_depth: usize) -> Option<LearningPath> {
    let target = catalog.lookup(target_id)?.clone();

    // The target can never be its own prerequisite, so it is placed up front.
    let mut placed: HashSet<CourseId> = HashSet::from([target_id]);
    let mut levels: Vec<Vec<Course>> = Vec::new();
    let mut frontier: Vec<CourseId> = target.prerequisite_ids.clone();

    while !frontier.is_empty() && levels.len() < max_depth {
        let mut level: Vec<Course> = Vec::new();
        let mut next_frontier: Vec<CourseId> = Vec::new();

        for id in frontier {
            // Already placed at an earlier level (or a repeat within this
            // frontier), keep the first placement.
            if placed.contains(&id) {
                continue;
            }

            let Some(course) = catalog.lookup(id) else {
                // Unknown ids are tolerated, not an error.
                continue;
            };

            placed.insert(id);

            for &sub_id in &course.prerequisite_ids {
                if !placed.contains(&sub_id) {
                    next_frontier.push(sub_id);
                }
            }

            level.push(course.clone());
        }

        if level.is_empty() {
            break;
        }

        levels.push(level);
        frontier = next_frontier;
    }

    let flat_path: Vec<Course> = levels.iter().flatten().cloned().collect();
    let total_hours = flat_path.iter().map(|c| c.estimated_hours).sum();
    let cycle_detected = has_cycle(catalog, &placed);

    Some(LearningPath {
        target,
        levels,
        flat_path,
        total_hours,
        cycle_detected,
    })
}

/// Build the learning path with the default depth cap
#[must_use]
pub fn build_path_default(catalog: &Catalog, target_id: CourseId) -> Option<LearningPath> {
    build_path(catalog, target_id, DEFAULT_MAX_DEPTH)
}

/// Check the prerequisite subgraph induced by `nodes` for a directed cycle
///
/// Kahn-style elimination: repeatedly remove vertices with no remaining
/// incoming edges; anything left over sits on a cycle. Edges pointing
/// outside `nodes` are ignored, so the check covers exactly what the
/// traversal visited.
fn has_cycle(catalog: &Catalog, nodes: &HashSet<CourseId>) -> bool {
    let mut outgoing: HashMap<CourseId, Vec<CourseId>> = HashMap::with_capacity(nodes.len());
    let mut indegree: HashMap<CourseId, usize> = nodes.iter().map(|&id| (id, 0)).collect();

    for &id in nodes {
        let Some(course) = catalog.lookup(id) else {
            continue;
        };

        let mut distinct: HashSet<CourseId> = HashSet::new();
        for &prereq in &course.prerequisite_ids {
            // Self-loops stay in: a course listing itself is a cycle.
            if nodes.contains(&prereq) && distinct.insert(prereq) {
                outgoing.entry(id).or_default().push(prereq);
                if let Some(count) = indegree.get_mut(&prereq) {
                    *count += 1;
                }
            }
        }
    }

    let mut queue: VecDeque<CourseId> = indegree
        .iter()
        .filter(|(_, &count)| count == 0)
        .map(|(&id, _)| id)
        .collect();

    let mut processed = 0usize;
    while let Some(id) = queue.pop_front() {
        processed += 1;

        if let Some(children) = outgoing.get(&id) {
            for child in children {
                if let Some(count) = indegree.get_mut(child) {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(*child);
                    }
                }
            }
        }
    }

    processed < nodes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn course(id: CourseId, hours: f32, prereqs: &[CourseId]) -> Course {
        let mut c = Course::new(
            id,
            format!("Course {id}"),
            "Programming".to_string(),
            hours,
        );
        c.prerequisite_ids = prereqs.to_vec();
        c
    }

    fn catalog(courses: Vec<Course>) -> Catalog {
        Catalog::new(courses)
    }

    #[test]
    fn no_prerequisites_yields_empty_path() {
        let cat = catalog(vec![course(1001, 40.0, &[])]);

        let path = build_path_default(&cat, 1001).expect("target exists");

        assert!(path.levels.is_empty());
        assert!(path.flat_path.is_empty());
        assert!((path.total_hours - 0.0).abs() < f32::EPSILON);
        assert!(!path.cycle_detected);
    }

    #[test]
    fn absent_target_returns_none() {
        let cat = catalog(vec![course(1001, 40.0, &[])]);
        assert!(build_path_default(&cat, 9999).is_none());
    }

    #[test]
    fn single_level_in_discovery_order() {
        let cat = catalog(vec![
            course(1001, 40.0, &[]),
            course(1002, 30.0, &[]),
            course(1003, 60.0, &[1001, 1002]),
        ]);

        let path = build_path_default(&cat, 1003).expect("target exists");

        assert_eq!(path.levels.len(), 1);
        let ids: Vec<CourseId> = path.levels[0].iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1001, 1002]);
        assert_eq!(path.required_ids(), vec![1001, 1002]);
        assert!((path.total_hours - 70.0).abs() < f32::EPSILON);
        assert!(!path.cycle_detected);
    }

    #[test]
    fn diamond_dependency_places_once_at_shallower_level() {
        let cat = catalog(vec![
            course(1000, 20.0, &[]),
            course(1001, 40.0, &[1000]),
            course(1002, 30.0, &[1000]),
            course(1004, 80.0, &[1001, 1002]),
        ]);

        let path = build_path_default(&cat, 1004).expect("target exists");

        assert_eq!(path.levels.len(), 2);
        let level0: Vec<CourseId> = path.levels[0].iter().map(|c| c.id).collect();
        let level1: Vec<CourseId> = path.levels[1].iter().map(|c| c.id).collect();
        assert_eq!(level0, vec![1001, 1002]);
        assert_eq!(level1, vec![1000]);
        assert!(!path.cycle_detected);
        // 1000 counted once
        assert!((path.total_hours - 90.0).abs() < f32::EPSILON);
    }

    #[test]
    fn diamond_at_different_depths_is_not_a_cycle() {
        // 1004 -> {1001, 1002}; 1002 -> 1003; 1003 -> 1001.
        // 1001 is reachable at depth 0 and again at depth 2.
        let cat = catalog(vec![
            course(1001, 10.0, &[]),
            course(1002, 10.0, &[1003]),
            course(1003, 10.0, &[1001]),
            course(1004, 10.0, &[1001, 1002]),
        ]);

        let path = build_path_default(&cat, 1004).expect("target exists");

        let level0: Vec<CourseId> = path.levels[0].iter().map(|c| c.id).collect();
        assert_eq!(level0, vec![1001, 1002]);
        assert!(!path.cycle_detected);
        // 1001 appears only once, at level 0
        assert_eq!(
            path.flat_path.iter().filter(|c| c.id == 1001).count(),
            1
        );
    }

    #[test]
    fn transitive_cycle_is_flagged_and_terminates() {
        // 1003 -> 1001 -> 1000 -> 1003
        let cat = catalog(vec![
            course(1000, 10.0, &[1003]),
            course(1001, 10.0, &[1000]),
            course(1003, 10.0, &[1001]),
        ]);

        let path = build_path_default(&cat, 1003).expect("target exists");

        assert!(path.cycle_detected);
        assert_eq!(path.levels.len(), 2);
        assert_eq!(path.levels[0][0].id, 1001);
        assert_eq!(path.levels[1][0].id, 1000);
        // The target is never placed as its own prerequisite
        assert!(path.flat_path.iter().all(|c| c.id != 1003));
    }

    #[test]
    fn cycle_not_involving_target_is_flagged() {
        // 1004 -> 1001; 1001 -> 1002; 1002 -> 1001
        let cat = catalog(vec![
            course(1001, 10.0, &[1002]),
            course(1002, 10.0, &[1001]),
            course(1004, 10.0, &[1001]),
        ]);

        let path = build_path_default(&cat, 1004).expect("target exists");

        assert!(path.cycle_detected);
        assert_eq!(path.required_ids(), vec![1001, 1002]);
    }

    #[test]
    fn direct_self_reference_is_flagged() {
        let cat = catalog(vec![course(1001, 10.0, &[1001])]);

        let path = build_path_default(&cat, 1001).expect("target exists");

        assert!(path.cycle_detected);
        assert!(path.flat_path.is_empty());
    }

    #[test]
    fn unknown_prerequisite_ids_are_dropped() {
        let cat = catalog(vec![
            course(1001, 10.0, &[]),
            course(1003, 10.0, &[1001, 7777]),
        ]);

        let path = build_path_default(&cat, 1003).expect("target exists");

        assert_eq!(path.required_ids(), vec![1001]);
        assert!(!path.cycle_detected);
    }

    #[test]
    fn duplicate_prerequisite_entries_place_once() {
        let cat = catalog(vec![
            course(1001, 25.0, &[]),
            course(1003, 10.0, &[1001, 1001, 1001]),
        ]);

        let path = build_path_default(&cat, 1003).expect("target exists");

        assert_eq!(path.required_ids(), vec![1001]);
        assert!((path.total_hours - 25.0).abs() < f32::EPSILON);
        assert!(!path.cycle_detected);
    }

    #[test]
    fn max_depth_truncates_quietly() {
        // Chain 1 -> 2 -> 3 -> 4 -> 5, built from the top
        let cat = catalog(vec![
            course(1, 1.0, &[2]),
            course(2, 1.0, &[3]),
            course(3, 1.0, &[4]),
            course(4, 1.0, &[5]),
            course(5, 1.0, &[]),
        ]);

        let path = build_path(&cat, 1, 2).expect("target exists");

        assert_eq!(path.levels.len(), 2);
        assert_eq!(path.required_ids(), vec![2, 3]);
        // Truncation is not a cycle
        assert!(!path.cycle_detected);

        let full = build_path_default(&cat, 1).expect("target exists");
        assert_eq!(full.required_ids(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn flat_path_has_no_duplicates() {
        let cat = catalog(vec![
            course(1, 1.0, &[2, 3]),
            course(2, 1.0, &[4]),
            course(3, 1.0, &[4]),
            course(4, 1.0, &[5]),
            course(5, 1.0, &[]),
        ]);

        let path = build_path_default(&cat, 1).expect("target exists");

        let mut seen = HashSet::new();
        for c in &path.flat_path {
            assert!(seen.insert(c.id), "duplicate course {} in flat_path", c.id);
        }
        let level_total: usize = path.levels.iter().map(Vec::len).sum();
        assert_eq!(level_total, path.flat_path.len());
    }
}
