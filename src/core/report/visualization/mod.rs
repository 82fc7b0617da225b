//! Visualization generation for learning paths
//!
//! Provides the Mermaid diagram generator embedded in Markdown and HTML
//! roadmap reports.

pub mod mermaid;

pub use mermaid::MermaidGenerator;
