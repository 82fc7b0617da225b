//! Data models for `EduPath`

pub mod catalog;
pub mod course;

pub use catalog::Catalog;
pub use course::{Course, CourseId, Difficulty};
