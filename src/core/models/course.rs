//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique course identifier (primary key within a catalog).
pub type CourseId = u32;

/// Difficulty classification for a course.
///
/// The catalog tolerates labels outside the standard three; they are
/// preserved verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    /// Entry-level course with no assumed background
    Beginner,
    /// Builds on beginner material
    Intermediate,
    /// Advanced or specialized material
    Advanced,
    /// Any other label found in the dataset, kept as-is
    Other(String),
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Other(value.trim().to_string()),
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
            Self::Other(label) => write!(f, "{label}"),
        }
    }
}

/// Represents a single course in the catalog
///
/// Immutable once loaded; the catalog owns all course records for the
/// process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier
    pub id: CourseId,

    /// Display title (e.g., "Data Structures in Python")
    pub title: String,

    /// Free-text grouping label (e.g., "Programming", "Data Science")
    pub category: String,

    /// Identifiers of courses this course depends on.
    /// May be empty, may reference unknown ids, and is not required to be
    /// unique or sorted.
    pub prerequisite_ids: Vec<CourseId>,

    /// Estimated hours to complete
    pub estimated_hours: f32,

    /// Difficulty classification
    pub difficulty: Difficulty,

    /// Learner rating
    pub rating: f32,

    /// Offering organization
    pub organization: String,
}

impl Course {
    /// Create a new course with no prerequisites
    ///
    /// # Arguments
    /// * `id` - Unique course identifier
    /// * `title` - Display title
    /// * `category` - Grouping label
    /// * `estimated_hours` - Estimated hours to complete
    #[must_use]
    pub const fn new(id: CourseId, title: String, category: String, estimated_hours: f32) -> Self {
        Self {
            id,
            title,
            category,
            prerequisite_ids: Vec::new(),
            estimated_hours,
            difficulty: Difficulty::Beginner,
            rating: 0.0,
            organization: String::new(),
        }
    }

    /// Add a prerequisite by course id (skips ids already listed)
    pub fn add_prerequisite(&mut self, prereq_id: CourseId) {
        if !self.prerequisite_ids.contains(&prereq_id) {
            self.prerequisite_ids.push(prereq_id);
        }
    }

    /// Whether this course has any listed prerequisites
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisite_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            1001,
            "Python for Everybody".to_string(),
            "Programming".to_string(),
            40.0,
        );

        assert_eq!(course.id, 1001);
        assert_eq!(course.title, "Python for Everybody");
        assert_eq!(course.category, "Programming");
        assert!((course.estimated_hours - 40.0).abs() < f32::EPSILON);
        assert!(course.prerequisite_ids.is_empty());
        assert!(!course.has_prerequisites());
    }

    #[test]
    fn test_add_prerequisite() {
        let mut course = Course::new(
            1003,
            "Machine Learning".to_string(),
            "AI".to_string(),
            60.0,
        );

        course.add_prerequisite(1001);
        assert_eq!(course.prerequisite_ids, vec![1001]);

        // Adding duplicate should not duplicate
        course.add_prerequisite(1001);
        assert_eq!(course.prerequisite_ids.len(), 1);

        course.add_prerequisite(1002);
        assert_eq!(course.prerequisite_ids, vec![1001, 1002]);
        assert!(course.has_prerequisites());
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from("Beginner"), Difficulty::Beginner);
        assert_eq!(Difficulty::from("intermediate"), Difficulty::Intermediate);
        assert_eq!(Difficulty::from(" ADVANCED "), Difficulty::Advanced);
        assert_eq!(
            Difficulty::from("Expert"),
            Difficulty::Other("Expert".to_string())
        );
    }

    #[test]
    fn test_difficulty_display_round_trip() {
        for label in ["Beginner", "Intermediate", "Advanced", "All Levels"] {
            assert_eq!(Difficulty::from(label).to_string(), label);
        }
    }
}
