//! Recommend command handler
//!
//! Attribute-filter recommendations and career-goal roadmaps over the
//! loaded catalog.

use edupath::config::Config;
use edupath::core::models::Course;
use edupath::core::recommend::{
    career_goals, career_roadmap, recommend_by_filters, RecommendFilters,
};
use serde_json::json;

/// Parsed recommend-command arguments
#[derive(Debug)]
pub struct Request {
    /// Category keyword filter
    pub category: Option<String>,
    /// Difficulty label filter
    pub difficulty: Option<String>,
    /// Upper bound on estimated hours
    pub max_hours: Option<f32>,
    /// Lower bound on rating
    pub min_rating: Option<f32>,
    /// Maximum number of results
    pub top: usize,
    /// Career goal (replaces the attribute filters)
    pub career: Option<String>,
    /// Emit results as JSON
    pub json: bool,
}

/// Run the recommend command
pub fn run(request: &Request, config: &Config) {
    let Some(catalog) = super::load_catalog(config) else {
        return;
    };

    if let Some(goal) = &request.career {
        let Some(roadmap) = career_roadmap(&catalog, goal) else {
            eprintln!(
                "✗ Unknown career goal '{goal}'. Choose from: {}",
                career_goals().join(", ")
            );
            return;
        };

        if request.json {
            let payload = json!({
                "career_goal": goal,
                "tracks": roadmap
                    .iter()
                    .map(|(category, courses)| json!({
                        "category": category,
                        "courses": courses,
                    }))
                    .collect::<Vec<_>>(),
            });
            match serde_json::to_string_pretty(&payload) {
                Ok(text) => println!("{text}"),
                Err(e) => eprintln!("✗ Failed to serialize roadmap: {e}"),
            }
            return;
        }

        println!("✓ Career roadmap: {goal}");
        for (category, courses) in roadmap {
            println!("\n  {category}:");
            if courses.is_empty() {
                println!("    (no matching courses in the catalog)");
            }
            for course in courses {
                println!("    {}", course_line(course));
            }
        }
        return;
    }

    let filters = RecommendFilters {
        category: request.category.clone(),
        difficulty: request.difficulty.clone(),
        max_hours: request.max_hours,
        min_rating: request.min_rating,
        top_k: request.top,
    };

    let matches = recommend_by_filters(&catalog, &filters);
    if matches.is_empty() {
        println!("No courses match the given filters");
        return;
    }

    if request.json {
        match serde_json::to_string_pretty(&matches) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("✗ Failed to serialize recommendations: {e}"),
        }
    } else {
        println!("✓ Top {} recommendations:", matches.len());
        for course in matches {
            println!("  {}", course_line(course));
        }
    }
}

/// One-line course rendering shared by both output modes
fn course_line(course: &Course) -> String {
    format!(
        "{} - {} [{}] ({:.1}h, {}, rated {:.1})",
        course.id,
        course.title,
        course.category,
        course.estimated_hours,
        course.difficulty,
        course.rating
    )
}
