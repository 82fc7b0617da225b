//! Catalog statistics
//!
//! Aggregates for the analytics surface: category and difficulty
//! distributions, rating and hour averages, and the top-rated shortlist.
//! `BTreeMap`s keep serialized output stable across runs.

use crate::core::models::{Catalog, Course};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of courses in the top-rated shortlist
const TOP_RATED_COUNT: usize = 10;

/// Aggregate statistics over a whole catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    /// Total number of courses
    pub total_courses: usize,

    /// Mean rating across all courses, rounded to two decimals
    pub avg_rating: f32,

    /// Category with the most courses (lexicographically first on ties;
    /// empty for an empty catalog)
    pub most_popular_category: String,

    /// Course count per category
    pub courses_per_category: BTreeMap<String, usize>,

    /// Course count per difficulty label
    pub difficulty_distribution: BTreeMap<String, usize>,

    /// Mean estimated hours per difficulty label, rounded to one decimal
    pub avg_hours_by_difficulty: BTreeMap<String, f32>,

    /// Highest-rated courses, best first (ties break by ascending id)
    pub top_rated: Vec<Course>,
}

impl CatalogStats {
    /// Compute all statistics for a catalog
    #[must_use]
    pub fn compute(catalog: &Catalog) -> Self {
        let mut courses_per_category: BTreeMap<String, usize> = BTreeMap::new();
        let mut difficulty_distribution: BTreeMap<String, usize> = BTreeMap::new();
        let mut hours_by_difficulty: BTreeMap<String, (f32, usize)> = BTreeMap::new();
        let mut rating_sum = 0.0f32;

        for course in catalog {
            *courses_per_category
                .entry(course.category.clone())
                .or_default() += 1;

            let difficulty = course.difficulty.to_string();
            *difficulty_distribution.entry(difficulty.clone()).or_default() += 1;

            let entry = hours_by_difficulty.entry(difficulty).or_insert((0.0, 0));
            entry.0 += course.estimated_hours;
            entry.1 += 1;

            rating_sum += course.rating;
        }

        let total_courses = catalog.len();

        #[allow(clippy::cast_precision_loss)]
        let avg_rating = if total_courses == 0 {
            0.0
        } else {
            round_to(rating_sum / total_courses as f32, 2)
        };

        #[allow(clippy::cast_precision_loss)]
        let avg_hours_by_difficulty = hours_by_difficulty
            .into_iter()
            .map(|(label, (sum, count))| (label, round_to(sum / count as f32, 1)))
            .collect();

        // BTreeMap iterates in key order, so `>` keeps the first key on ties
        let most_popular_category = courses_per_category
            .iter()
            .fold(("", 0usize), |best, (category, &count)| {
                if count > best.1 {
                    (category.as_str(), count)
                } else {
                    best
                }
            })
            .0
            .to_string();

        let mut top_rated: Vec<Course> = catalog.iter().cloned().collect();
        top_rated.sort_by(|a, b| b.rating.total_cmp(&a.rating).then(a.id.cmp(&b.id)));
        top_rated.truncate(TOP_RATED_COUNT);

        Self {
            total_courses,
            avg_rating,
            most_popular_category,
            courses_per_category,
            difficulty_distribution,
            avg_hours_by_difficulty,
            top_rated,
        }
    }
}

/// Round to `decimals` decimal places
fn round_to(value: f32, decimals: u32) -> f32 {
    let factor = 10f32.powi(decimals.try_into().unwrap_or(0));
    (value * factor).round() / factor
}
