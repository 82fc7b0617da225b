//! Roadmap report generation
//!
//! Renders a learning path as a shareable report in Markdown or HTML, with
//! a Mermaid visualization of the prerequisite graph.

pub mod formats;
pub mod visualization;

use crate::core::path::LearningPath;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::MermaidGenerator;

/// Data context for roadmap report generation
///
/// Aggregates everything a template needs to render one learning path.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// The learning path being reported
    pub path: &'a LearningPath,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(path: &'a LearningPath) -> Self {
        Self { path }
    }

    /// Title of the target course
    #[must_use]
    pub fn target_title(&self) -> &str {
        &self.path.target.title
    }

    /// Number of prerequisite levels
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.path.levels.len()
    }

    /// Number of distinct prerequisite courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.path.flat_path.len()
    }

    /// Total estimated hours across the path, target included
    #[must_use]
    pub fn total_hours_with_target(&self) -> f32 {
        self.path.total_hours + self.path.target.estimated_hours
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course};
    use crate::core::path::build_path_default;

    #[test]
    fn context_exposes_path_shape() {
        let mut target = Course::new(
            1003,
            "Machine Learning".to_string(),
            "AI".to_string(),
            60.0,
        );
        target.prerequisite_ids = vec![1001];
        let catalog = Catalog::new(vec![
            Course::new(
                1001,
                "Python Basics".to_string(),
                "Programming".to_string(),
                40.0,
            ),
            target,
        ]);

        let path = build_path_default(&catalog, 1003).expect("target exists");
        let ctx = ReportContext::new(&path);

        assert_eq!(ctx.target_title(), "Machine Learning");
        assert_eq!(ctx.level_count(), 1);
        assert_eq!(ctx.course_count(), 1);
        assert!((ctx.total_hours_with_target() - 100.0).abs() < f32::EPSILON);
    }
}
