//! Mermaid diagram generator for learning paths
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::models::{Course, CourseId};
use crate::core::path::LearningPath;
use std::collections::HashSet;
use std::fmt::Write;

/// Maximum characters of a course title shown in a node label
const NODE_TITLE_LIMIT: usize = 20;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a level-organized flowchart for a learning path
    ///
    /// Each prerequisite level becomes a subgraph (deepest level first,
    /// since that is where study begins), the target course sits in its own
    /// subgraph at the end, and arrows point from each prerequisite to the
    /// course that requires it.
    #[must_use]
    pub fn generate_path_diagram(path: &LearningPath) -> String {
        let mut output = String::from("```mermaid\nflowchart LR\n");

        // Study starts at the deepest level
        for (idx, level) in path.levels.iter().enumerate().rev() {
            let step = path.levels.len() - idx;
            let _ = writeln!(output, "    subgraph step{step}[\"Step {step}\"]");
            for course in level {
                let _ = writeln!(
                    output,
                    "        {}[\"{}\"]",
                    Self::node_id(course.id),
                    Self::node_label(course)
                );
            }
            output.push_str("    end\n\n");
        }

        let _ = writeln!(output, "    subgraph goal[\"Goal\"]");
        let _ = writeln!(
            output,
            "        {}[\"{}\"]",
            Self::node_id(path.target.id),
            Self::node_label(&path.target)
        );
        output.push_str("    end\n\n");

        // Prerequisite edges, restricted to courses actually on the path
        let on_path: HashSet<CourseId> = path
            .flat_path
            .iter()
            .map(|c| c.id)
            .chain(std::iter::once(path.target.id))
            .collect();

        let mut drawn: HashSet<(CourseId, CourseId)> = HashSet::new();
        for course in path.flat_path.iter().chain(std::iter::once(&path.target)) {
            for &prereq in &course.prerequisite_ids {
                if prereq != course.id
                    && on_path.contains(&prereq)
                    && drawn.insert((prereq, course.id))
                {
                    let _ = writeln!(
                        output,
                        "    {} --> {}",
                        Self::node_id(prereq),
                        Self::node_id(course.id)
                    );
                }
            }
        }

        output.push_str("```\n");
        output
    }

    /// Stable Mermaid node id for a course
    fn node_id(id: CourseId) -> String {
        format!("c{id}")
    }

    /// Display label for a course node
    fn node_label(course: &Course) -> String {
        let title = if course.title.len() > NODE_TITLE_LIMIT {
            let cut = course
                .title
                .char_indices()
                .take_while(|(i, _)| *i < NODE_TITLE_LIMIT - 3)
                .last()
                .map_or(0, |(i, c)| i + c.len_utf8());
            format!("{}...", &course.title[..cut])
        } else {
            course.title.clone()
        };

        format!("{}<br/>{}<br/>{}h", course.id, title, course.estimated_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Catalog;
    use crate::core::path::build_path_default;

    fn course(id: CourseId, title: &str, prereqs: &[CourseId]) -> Course {
        let mut c = Course::new(id, title.to_string(), "Programming".to_string(), 10.0);
        c.prerequisite_ids = prereqs.to_vec();
        c
    }

    #[test]
    fn test_path_diagram_generation() {
        let catalog = Catalog::new(vec![
            course(1001, "Intro", &[]),
            course(1002, "Data Structures", &[1001]),
            course(1003, "Algorithms", &[1002]),
        ]);
        let path = build_path_default(&catalog, 1003).expect("target exists");

        let diagram = MermaidGenerator::generate_path_diagram(&path);

        assert!(diagram.contains("```mermaid"));
        assert!(diagram.contains("flowchart LR"));
        assert!(diagram.contains("subgraph step1"));
        assert!(diagram.contains("subgraph goal"));
        assert!(diagram.contains("c1001 --> c1002"));
        assert!(diagram.contains("c1002 --> c1003"));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let catalog = Catalog::new(vec![
            course(1, "An Extremely Long Course Title That Never Ends", &[]),
            course(2, "Target", &[1]),
        ]);
        let path = build_path_default(&catalog, 2).expect("target exists");

        let diagram = MermaidGenerator::generate_path_diagram(&path);
        assert!(diagram.contains("..."));
        assert!(!diagram.contains("That Never Ends"));
    }

    #[test]
    fn test_edges_outside_path_are_skipped() {
        // 2's prereq list mentions 99, which is not in the catalog
        let catalog = Catalog::new(vec![course(1, "Base", &[]), course(2, "Target", &[1, 99])]);
        let path = build_path_default(&catalog, 2).expect("target exists");

        let diagram = MermaidGenerator::generate_path_diagram(&path);
        assert!(!diagram.contains("c99"));
    }
}
