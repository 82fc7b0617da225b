//! Search command handler

use edupath::config::Config;
use edupath::core::models::Course;
use edupath::core::search::{find_by_id, search_by_category, search_by_title};

/// Run the search command
///
/// Exactly one of `id`, `title`, or `category` is expected; id lookup wins
/// when several are given.
pub fn run(
    id: Option<u32>,
    title: Option<&str>,
    category: Option<&str>,
    json: bool,
    config: &Config,
) {
    let Some(catalog) = super::load_catalog(config) else {
        return;
    };

    if let Some(id) = id {
        match find_by_id(&catalog, id) {
            Some(course) => print_courses(vec![course], json),
            None => eprintln!("✗ Course {id} not found"),
        }
        return;
    }

    if let Some(keyword) = title {
        let matches = search_by_title(&catalog, keyword);
        if matches.is_empty() && !json {
            println!("No courses match title '{keyword}'");
        } else {
            print_courses(matches, json);
        }
        return;
    }

    if let Some(keyword) = category {
        let matches = search_by_category(&catalog, keyword);
        if matches.is_empty() && !json {
            println!("No courses match category '{keyword}'");
        } else {
            print_courses(matches, json);
        }
        return;
    }

    eprintln!("✗ Provide --id, --title, or --category");
}

/// Print a list of courses as text or JSON
fn print_courses(courses: Vec<&Course>, json: bool) {
    if json {
        match serde_json::to_string_pretty(&courses) {
            Ok(payload) => println!("{payload}"),
            Err(e) => eprintln!("✗ Failed to serialize courses: {e}"),
        }
        return;
    }

    for course in courses {
        println!(
            "{} - {} [{}] ({:.1}h, {}, rated {:.1}) by {}",
            course.id,
            course.title,
            course.category,
            course.estimated_hours,
            course.difficulty,
            course.rating,
            course.organization
        );
    }
}
