//! Stats command handler

use edupath::config::Config;
use edupath::core::stats::CatalogStats;

/// Run the stats command
pub fn run(json: bool, config: &Config) {
    let Some(catalog) = super::load_catalog(config) else {
        return;
    };

    let stats = CatalogStats::compute(&catalog);

    if json {
        match serde_json::to_string_pretty(&stats) {
            Ok(payload) => println!("{payload}"),
            Err(e) => eprintln!("✗ Failed to serialize statistics: {e}"),
        }
        return;
    }

    println!("✓ Catalog statistics");
    println!("  Courses: {}", stats.total_courses);
    println!("  Average rating: {:.2}", stats.avg_rating);
    println!("  Most popular category: {}", stats.most_popular_category);

    println!("\n  Courses per category:");
    for (category, count) in &stats.courses_per_category {
        println!("    {category}: {count}");
    }

    println!("\n  Difficulty distribution:");
    for (difficulty, count) in &stats.difficulty_distribution {
        let avg_hours = stats
            .avg_hours_by_difficulty
            .get(difficulty)
            .copied()
            .unwrap_or(0.0);
        println!("    {difficulty}: {count} courses, {avg_hours:.1}h on average");
    }

    println!("\n  Top rated:");
    for course in &stats.top_rated {
        println!("    {} - {} ({:.1})", course.id, course.title, course.rating);
    }
}
