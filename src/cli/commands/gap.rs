//! Gap command handler
//!
//! Compares completed courses against a target course's prerequisite path
//! and reports what is still missing.

use edupath::config::Config;
use edupath::core::gap::{analyze_gap, GapReport, DEFAULT_NEXT_STEPS};
use edupath::core::models::CourseId;
use edupath::core::path::DEFAULT_MAX_DEPTH;
use std::collections::HashSet;

/// Run the gap command
///
/// # Arguments
/// * `course_id` - Target course id
/// * `completed` - Ids of courses the learner has completed
/// * `next` - Optional "study next" list size (falls back to config, then built-in)
/// * `json` - Emit the gap report as JSON instead of text
/// * `config` - Loaded configuration
pub fn run(course_id: u32, completed: &[u32], next: Option<usize>, json: bool, config: &Config) {
    let Some(catalog) = super::load_catalog(config) else {
        return;
    };

    let completed_set: HashSet<CourseId> = completed.iter().copied().collect();
    let max_depth = if config.engine.max_depth == 0 {
        DEFAULT_MAX_DEPTH
    } else {
        config.engine.max_depth
    };
    let next_steps = next.unwrap_or(if config.engine.next_steps == 0 {
        DEFAULT_NEXT_STEPS
    } else {
        config.engine.next_steps
    });

    let Some(report) = analyze_gap(&catalog, course_id, &completed_set, max_depth, next_steps)
    else {
        eprintln!("✗ Course {course_id} not found");
        return;
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(e) => eprintln!("✗ Failed to serialize gap report: {e}"),
        }
    } else {
        print_report(&report);
    }
}

/// Print the gap report as a progress summary
fn print_report(report: &GapReport) {
    println!(
        "✓ Gap analysis for {} - {}",
        report.target.id, report.target.title
    );
    println!(
        "  Progress: {:.1}% ({} of {} prerequisites completed)",
        report.progress_percent,
        report.completed_ids.len(),
        report.total_required
    );

    if report.missing.is_empty() {
        println!("  All prerequisites complete, ready to start!");
        return;
    }

    println!("\n  Missing ({} courses, in study order):", report.total_missing);
    for course in &report.missing {
        println!(
            "    {} - {} ({:.1}h, {})",
            course.id, course.title, course.estimated_hours, course.difficulty
        );
    }

    println!("\n  Study next:");
    for course in &report.next_recommended {
        println!("    {} - {}", course.id, course.title);
    }
}
