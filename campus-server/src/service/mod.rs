//! Resource services
//!
//! Every public operation here is one unit of work: it begins a transaction, drives
//! the repositories over that transaction's connection, assembles the response and
//! commits. An error anywhere drops the unit of work, which rolls it back.

pub mod courses;
pub mod departments;
pub mod students;
pub mod teachers;

pub use courses::CourseService;
pub use departments::DepartmentService;
pub use students::StudentService;
pub use teachers::TeacherService;
