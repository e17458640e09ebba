//! Route handlers organized by resource

pub mod courses;
pub mod departments;
pub mod health;
pub mod students;
pub mod teachers;
