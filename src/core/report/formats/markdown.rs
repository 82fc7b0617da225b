//! Markdown report generator
//!
//! Generates roadmap reports in Markdown format with an embedded Mermaid
//! diagram. These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown roadmap report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let path = ctx.path;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{target_title}}", &path.target.title);
        output = output.replace("{{target_id}}", &path.target.id.to_string());
        output = output.replace("{{category}}", &path.target.category);
        output = output.replace("{{difficulty}}", &path.target.difficulty.to_string());
        output = output.replace("{{organization}}", &path.target.organization);
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{level_count}}", &ctx.level_count().to_string());
        output = output.replace("{{total_hours}}", &format!("{:.1}", path.total_hours));
        output = output.replace(
            "{{total_hours_with_target}}",
            &format!("{:.1}", ctx.total_hours_with_target()),
        );

        let cycle_warning = if path.cycle_detected {
            "\n> ⚠️ The prerequisite data for this course contains a circular \
             dependency; the path below is a best-effort ordering.\n"
                .to_string()
        } else {
            String::new()
        };
        output = output.replace("{{cycle_warning}}", &cycle_warning);

        output = output.replace("{{study_table}}", &Self::generate_study_table(ctx));

        let diagram = MermaidGenerator::generate_path_diagram(path);
        output = output.replace("{{mermaid_diagram}}", &diagram);

        output
    }

    /// Generate the step-by-step study table
    ///
    /// Steps count up from the deepest level, since study begins at the
    /// leaves of the prerequisite graph.
    fn generate_study_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Step | Courses | Hours |\n");
        table.push_str("|---|---|---|\n");

        for (step, level) in ctx.path.levels.iter().rev().enumerate() {
            let courses: Vec<String> = level
                .iter()
                .map(|c| format!("{} - {}", c.id, c.title))
                .collect();
            let hours: f32 = level.iter().map(|c| c.estimated_hours).sum();

            let _ = writeln!(
                table,
                "| {} | {} | {:.1} |",
                step + 1,
                courses.join(", "),
                hours
            );
        }

        let _ = writeln!(
            table,
            "| Goal | {} - {} | {:.1} |",
            ctx.path.target.id, ctx.path.target.title, ctx.path.target.estimated_hours
        );

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course};
    use crate::core::path::build_path_default;

    fn sample_path_catalog() -> Catalog {
        let mut ds = Course::new(
            1002,
            "Data Structures".to_string(),
            "Programming".to_string(),
            30.0,
        );
        ds.prerequisite_ids = vec![1001];
        let mut ml = Course::new(1003, "Machine Learning".to_string(), "AI".to_string(), 60.0);
        ml.prerequisite_ids = vec![1002];

        Catalog::new(vec![
            Course::new(
                1001,
                "Python Basics".to_string(),
                "Programming".to_string(),
                40.0,
            ),
            ds,
            ml,
        ])
    }

    #[test]
    fn renders_every_section() {
        let catalog = sample_path_catalog();
        let path = build_path_default(&catalog, 1003).expect("target exists");
        let ctx = ReportContext::new(&path);

        let report = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(report.contains("# Learning Path: Machine Learning"));
        assert!(report.contains("| Step | Courses | Hours |"));
        assert!(report.contains("1001 - Python Basics"));
        assert!(report.contains("```mermaid"));
        // No placeholders left behind
        assert!(!report.contains("{{"));
        // Clean path, no cycle warning
        assert!(!report.contains("circular"));
    }

    #[test]
    fn study_table_starts_at_deepest_level() {
        let catalog = sample_path_catalog();
        let path = build_path_default(&catalog, 1003).expect("target exists");
        let ctx = ReportContext::new(&path);

        let table = MarkdownReporter::generate_study_table(&ctx);
        let step1 = table.lines().nth(2).expect("first step row");
        assert!(step1.contains("Python Basics"));
    }

    #[test]
    fn cycle_warning_appears_when_flagged() {
        let mut a = Course::new(1, "A".to_string(), "X".to_string(), 1.0);
        a.prerequisite_ids = vec![2];
        let mut b = Course::new(2, "B".to_string(), "X".to_string(), 1.0);
        b.prerequisite_ids = vec![1];
        let catalog = Catalog::new(vec![a, b]);

        let path = build_path_default(&catalog, 1).expect("target exists");
        assert!(path.cycle_detected);

        let report = MarkdownReporter::new()
            .render(&ReportContext::new(&path))
            .expect("render");
        assert!(report.contains("circular"));
    }
}
