//! Catalog loader
//!
//! Loads the course dataset CSV and tidies it into a `Catalog`:
//! duplicate ids and rows missing a title or category are dropped,
//! malformed prerequisite lists degrade to empty, and numeric fields
//! coerce with zero defaults. A single bad row never aborts the load.

use crate::core::models::{Catalog, Course, CourseId, Difficulty};
use logger::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load and tidy a course dataset CSV into a catalog
///
/// Expected columns (by header name, order-independent):
/// `course_id`, `course_title`, `category`, `prerequisite_ids`,
/// `est_hours`, `course_difficulty`, `course_rating`,
/// `course_organization`. The prerequisite cell holds a bracketed id list
/// (e.g. `"[1001, 1002]"`) or is empty.
///
/// # Errors
/// Returns an error if the file cannot be read, has no header row, or is
/// missing the `course_id` column. Row-level problems are logged and
/// skipped instead.
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut lines = content.lines();
    let header_line = lines.next().ok_or("Dataset is empty: no header row")?;
    let headers: Vec<String> = parse_csv_line(header_line)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    if !headers.iter().any(|h| h == "course_id") {
        return Err("Dataset has no 'course_id' column".into());
    }

    let mut courses: Vec<Course> = Vec::new();
    let mut seen_ids: HashSet<CourseId> = HashSet::new();
    let mut duplicates_removed = 0usize;
    let mut missing_field_rows = 0usize;
    let mut malformed_prereq_rows = 0usize;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_csv_line(line);

        let Some(id) = get_field(&fields, &headers, "course_id")
            .and_then(|v| v.trim().parse::<CourseId>().ok())
        else {
            warn!("Skipping row with unparsable course_id: {line}");
            continue;
        };

        if !seen_ids.insert(id) {
            duplicates_removed += 1;
            continue;
        }

        let title = string_field(&fields, &headers, "course_title");
        let category = string_field(&fields, &headers, "category");
        if title.is_empty() || category.is_empty() {
            missing_field_rows += 1;
            seen_ids.remove(&id);
            continue;
        }

        let prereq_cell = string_field(&fields, &headers, "prerequisite_ids");
        let prerequisite_ids = parse_prereq_list(&prereq_cell).unwrap_or_else(|| {
            warn!("Course {id}: malformed prerequisite list '{prereq_cell}', treating as empty");
            malformed_prereq_rows += 1;
            Vec::new()
        });

        let estimated_hours = numeric_field(&fields, &headers, "est_hours");
        let rating = numeric_field(&fields, &headers, "course_rating");
        let difficulty = Difficulty::from(string_field(&fields, &headers, "course_difficulty"));
        let organization = string_field(&fields, &headers, "course_organization");

        courses.push(Course {
            id,
            title,
            category,
            prerequisite_ids,
            estimated_hours,
            difficulty,
            rating,
            organization,
        });
    }

    info!(
        "Loaded {} courses from {} ({} duplicates, {} missing-field rows, {} malformed prerequisite lists)",
        courses.len(),
        path.display(),
        duplicates_removed,
        missing_field_rows,
        malformed_prereq_rows
    );

    Ok(Catalog::new(courses))
}

/// Parse one CSV line, honoring double-quoted fields and `""` escapes
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.clone());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

/// Get a raw field by header name
fn get_field<'a>(fields: &'a [String], headers: &[String], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .position(|h| h == name)
        .and_then(|pos| fields.get(pos))
        .map(String::as_str)
}

/// Get a trimmed string field, empty when the column is absent
fn string_field(fields: &[String], headers: &[String], name: &str) -> String {
    get_field(fields, headers, name)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Get a numeric field, coercing unparsable or absent values to zero
fn numeric_field(fields: &[String], headers: &[String], name: &str) -> f32 {
    get_field(fields, headers, name)
        .and_then(|v| v.trim().parse::<f32>().ok())
        .unwrap_or(0.0)
}

/// Parse a bracketed prerequisite list (`[1001, 1002]`) into ids
///
/// An empty cell or bare `[]` is an empty list. Anything else that fails to
/// parse (missing brackets, non-integer entries) yields `None` so the
/// caller can degrade to empty with a warning.
fn parse_prereq_list(value: &str) -> Option<Vec<CourseId>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }

    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.is_empty() {
        return Some(Vec::new());
    }

    inner
        .split(&[',', ';'][..])
        .map(|part| part.trim().parse::<CourseId>().ok())
        .collect()
}
