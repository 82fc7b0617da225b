//! Roadmap command handler
//!
//! Builds and displays the prerequisite learning path for a target course,
//! optionally rendering it as a Markdown or HTML report.

use edupath::config::Config;
use edupath::core::path::{build_path, LearningPath, DEFAULT_MAX_DEPTH};
use edupath::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the roadmap command
///
/// # Arguments
/// * `course_id` - Target course id
/// * `max_depth` - Optional traversal depth cap (falls back to config, then built-in)
/// * `json` - Emit the learning path as JSON instead of text
/// * `report` - Optional report format (markdown, html)
/// * `output` - Optional report output path
/// * `config` - Loaded configuration
pub fn run(
    course_id: u32,
    max_depth: Option<usize>,
    json: bool,
    report: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) {
    let Some(catalog) = super::load_catalog(config) else {
        return;
    };

    let depth = effective_max_depth(max_depth, config);
    let Some(path) = build_path(&catalog, course_id, depth) else {
        eprintln!("✗ Course {course_id} not found");
        return;
    };

    if json {
        match serde_json::to_string_pretty(&path) {
            Ok(payload) => println!("{payload}"),
            Err(e) => eprintln!("✗ Failed to serialize learning path: {e}"),
        }
    } else {
        print_path(&path);
    }

    if let Some(format_str) = report {
        if let Err(err) = write_report(&path, format_str, output, config) {
            error!("Roadmap report failed for course {course_id}: {err}");
            eprintln!("{err}");
        }
    }
}

/// Resolve the depth cap: CLI flag, then config, then built-in default
fn effective_max_depth(cli_value: Option<usize>, config: &Config) -> usize {
    cli_value.unwrap_or(if config.engine.max_depth == 0 {
        DEFAULT_MAX_DEPTH
    } else {
        config.engine.max_depth
    })
}

/// Print the learning path as a study plan
fn print_path(path: &LearningPath) {
    println!(
        "✓ Learning path for {} - {}",
        path.target.id, path.target.title
    );
    println!(
        "  Prerequisites: {} across {} steps · {:.1} hours (plus {:.1}h for the target)",
        path.flat_path.len(),
        path.levels.len(),
        path.total_hours,
        path.target.estimated_hours
    );

    if path.cycle_detected {
        println!("  ⚠ Circular prerequisite data detected; showing a best-effort path.");
    }

    if path.levels.is_empty() {
        println!("\n  No prerequisites, start right away.");
        return;
    }

    println!();
    for (step, level) in path.levels.iter().rev().enumerate() {
        println!("  Step {}:", step + 1);
        for course in level {
            println!(
                "    {} - {} ({:.1}h, {})",
                course.id, course.title, course.estimated_hours, course.difficulty
            );
        }
    }
    println!("  Goal: {} - {}", path.target.id, path.target.title);
}

/// Render the roadmap report and write it to disk
fn write_report(
    path: &LearningPath,
    format_str: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let final_output_path: PathBuf = if let Some(output) = output {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
        reports_dir.join(format!(
            "{}_roadmap.{}",
            path.target.id,
            format.extension()
        ))
    };

    let ctx = ReportContext::new(path);
    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &final_output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &final_output_path),
    };
    result.map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Roadmap report exported to: {}", final_output_path.display());
    Ok(())
}
