//! Filter-based course recommendations and career roadmaps
//!
//! These are the catalog-local recommenders: attribute filters sorted by
//! rating, and fixed career tracks mapped to category shortlists. The
//! similarity-matrix recommender is a separate service and not part of
//! this crate.

use crate::core::models::{Catalog, Course};

/// Default number of recommendations returned
pub const DEFAULT_TOP_K: usize = 5;

/// Courses listed per category in a career roadmap
const COURSES_PER_TRACK_CATEGORY: usize = 5;

/// Career goals and the course categories that feed them
pub const CAREER_TRACKS: &[(&str, &[&str])] = &[
    (
        "Data Scientist",
        &["Data Science", "AI", "Programming", "Mathematics"],
    ),
    (
        "Full Stack Developer",
        &["Web Dev", "Programming", "Database", "Cloud"],
    ),
    (
        "AI Engineer",
        &["AI", "Programming", "Mathematics", "Computer Sci"],
    ),
    (
        "Cloud Engineer",
        &["Cloud", "DevOps", "Networking", "Programming"],
    ),
    (
        "Cybersecurity Analyst",
        &["Cybersecurity", "Networking", "Programming"],
    ),
];

/// Optional attribute filters for recommendations
#[derive(Debug, Clone)]
pub struct RecommendFilters {
    /// Keep courses whose category contains this (case-insensitive)
    pub category: Option<String>,
    /// Keep courses whose difficulty label contains this (case-insensitive)
    pub difficulty: Option<String>,
    /// Keep courses at or under this many estimated hours
    pub max_hours: Option<f32>,
    /// Keep courses rated at or above this
    pub min_rating: Option<f32>,
    /// Maximum number of results
    pub top_k: usize,
}

impl Default for RecommendFilters {
    fn default() -> Self {
        Self {
            category: None,
            difficulty: None,
            max_hours: None,
            min_rating: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Recommend courses matching the filters, best-rated first
///
/// Ties in rating break by ascending id so results are deterministic for a
/// given catalog.
#[must_use]
pub fn recommend_by_filters<'a>(
    catalog: &'a Catalog,
    filters: &RecommendFilters,
) -> Vec<&'a Course> {
    let category = filters.category.as_deref().map(str::to_lowercase);
    let difficulty = filters.difficulty.as_deref().map(str::to_lowercase);

    let mut matches: Vec<&Course> = catalog
        .iter()
        .filter(|c| {
            category
                .as_deref()
                .is_none_or(|needle| c.category.to_lowercase().contains(needle))
        })
        .filter(|c| {
            difficulty
                .as_deref()
                .is_none_or(|needle| c.difficulty.to_string().to_lowercase().contains(needle))
        })
        .filter(|c| filters.max_hours.is_none_or(|max| c.estimated_hours <= max))
        .filter(|c| filters.min_rating.is_none_or(|min| c.rating >= min))
        .collect();

    sort_by_rating(&mut matches);
    matches.truncate(filters.top_k);
    matches
}

/// Build a per-category roadmap for a career goal
///
/// Goal matching is case-insensitive against the fixed track names; unknown
/// goals return `None`. Each category lists its top-rated courses.
#[must_use]
pub fn career_roadmap<'a>(
    catalog: &'a Catalog,
    goal: &str,
) -> Option<Vec<(String, Vec<&'a Course>)>> {
    let (_, categories) = CAREER_TRACKS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(goal.trim()))?;

    let roadmap = categories
        .iter()
        .map(|category| {
            let needle = category.to_lowercase();
            let mut matching: Vec<&Course> = catalog
                .iter()
                .filter(|c| c.category.to_lowercase().contains(&needle))
                .collect();
            sort_by_rating(&mut matching);
            matching.truncate(COURSES_PER_TRACK_CATEGORY);
            ((*category).to_string(), matching)
        })
        .collect();

    Some(roadmap)
}

/// Names of all known career goals, for error messages
#[must_use]
pub fn career_goals() -> Vec<&'static str> {
    CAREER_TRACKS.iter().map(|(name, _)| *name).collect()
}

/// Rating descending, id ascending on ties
fn sort_by_rating(courses: &mut [&Course]) {
    courses.sort_by(|a, b| b.rating.total_cmp(&a.rating).then(a.id.cmp(&b.id)));
}
