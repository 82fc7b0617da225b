//! Course search
//!
//! Keyed lookup runs in O(log n) against the catalog's cached id-ordered
//! sequence; title and category searches are linear scans.

use crate::core::models::{Catalog, Course, CourseId};

/// Find a course by id via binary search over the ordered sequence
///
/// Agrees with `Catalog::lookup` for every id; exists so callers holding
/// only the ordered slice semantics pay O(log n) rather than a table probe.
#[must_use]
pub fn find_by_id(catalog: &Catalog, id: CourseId) -> Option<&Course> {
    let courses = catalog.ordered_by_id();
    courses
        .binary_search_by_key(&id, |c| c.id)
        .ok()
        .map(|pos| &courses[pos])
}

/// Find courses whose title contains `keyword` (case-insensitive)
#[must_use]
pub fn search_by_title<'a>(catalog: &'a Catalog, keyword: &str) -> Vec<&'a Course> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|c| c.title.to_lowercase().contains(&needle))
        .collect()
}

/// Find courses whose category contains `keyword` (case-insensitive)
#[must_use]
pub fn search_by_category<'a>(catalog: &'a Catalog, keyword: &str) -> Vec<&'a Course> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|c| c.category.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn catalog() -> Catalog {
        let mut courses = vec![
            Course::new(
                1001,
                "Python for Everybody".to_string(),
                "Programming".to_string(),
                40.0,
            ),
            Course::new(
                1002,
                "SQL Fundamentals".to_string(),
                "Database".to_string(),
                25.0,
            ),
            Course::new(
                1003,
                "Advanced Python Patterns".to_string(),
                "Programming".to_string(),
                55.0,
            ),
        ];
        courses.reverse(); // catalog must sort regardless of input order
        Catalog::new(courses)
    }

    #[test]
    fn find_by_id_agrees_with_lookup() {
        let cat = catalog();

        for id in [1001, 1002, 1003] {
            assert_eq!(
                find_by_id(&cat, id).map(|c| c.id),
                cat.lookup(id).map(|c| c.id)
            );
        }
        assert!(find_by_id(&cat, 42).is_none());
    }

    #[test]
    fn title_search_is_case_insensitive() {
        let cat = catalog();

        let hits = search_by_title(&cat, "python");
        let ids: Vec<_> = hits.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1001, 1003]);

        assert!(search_by_title(&cat, "haskell").is_empty());
    }

    #[test]
    fn blank_keyword_matches_nothing() {
        let cat = catalog();
        assert!(search_by_title(&cat, "   ").is_empty());
        assert!(search_by_category(&cat, "").is_empty());
    }

    #[test]
    fn category_search_matches_substring() {
        let cat = catalog();

        let hits = search_by_category(&cat, "data");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1002);
    }
}
