//! HTML report generator
//!
//! Generates roadmap reports as a single self-contained HTML page with
//! embedded CSS.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML roadmap report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let path = ctx.path;
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{target_title}}", &escape_html(&path.target.title));
        output = output.replace("{{target_id}}", &path.target.id.to_string());
        output = output.replace("{{category}}", &escape_html(&path.target.category));
        output = output.replace(
            "{{difficulty}}",
            &escape_html(&path.target.difficulty.to_string()),
        );
        output = output.replace("{{organization}}", &escape_html(&path.target.organization));
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{level_count}}", &ctx.level_count().to_string());
        output = output.replace("{{total_hours}}", &format!("{:.1}", path.total_hours));
        output = output.replace(
            "{{total_hours_with_target}}",
            &format!("{:.1}", ctx.total_hours_with_target()),
        );

        let cycle_warning = if path.cycle_detected {
            "<div class=\"cycle-warning\">⚠️ The prerequisite data for this course \
             contains a circular dependency; the path below is a best-effort ordering.</div>"
                .to_string()
        } else {
            String::new()
        };
        output = output.replace("{{cycle_warning}}", &cycle_warning);

        output = output.replace("{{study_table}}", &Self::generate_study_table(ctx));

        output
    }

    /// Generate the step-by-step study table
    fn generate_study_table(ctx: &ReportContext) -> String {
        let mut table = String::from(
            "<table>\n<tr><th>Step</th><th>Courses</th><th>Hours</th></tr>\n",
        );

        for (step, level) in ctx.path.levels.iter().rev().enumerate() {
            let courses: Vec<String> = level
                .iter()
                .map(|c| format!("{} – {}", c.id, escape_html(&c.title)))
                .collect();
            let hours: f32 = level.iter().map(|c| c.estimated_hours).sum();

            let _ = writeln!(
                table,
                "<tr><td class=\"step\">Step {}</td><td>{}</td><td>{:.1}</td></tr>",
                step + 1,
                courses.join("<br>"),
                hours
            );
        }

        let _ = writeln!(
            table,
            "<tr><td class=\"step\">Goal</td><td>{} – {}</td><td>{:.1}</td></tr>",
            ctx.path.target.id,
            escape_html(&ctx.path.target.title),
            ctx.path.target.estimated_hours
        );

        table.push_str("</table>\n");
        table
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

/// Minimal HTML escaping for text interpolated into the template
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
