//! Domain models with validation at construction
//!
//! Request input is validated when building these types; invalid input returns
//! `ValidationError`, not panic. Entities hold foreign keys as plain ids so the store
//! layer never builds a bidirectional object graph.

pub mod entity;
pub mod input;
pub mod text;
pub mod validation;

pub use entity::{
    Course, CourseWithTeacher, Department, DepartmentWithHead, EntityKind, Student, Teacher,
    TeacherWithDepartment,
};
pub use input::{NewCourse, NewDepartment, NewStudent, NewTeacher};
pub use text::RequiredText;
pub use validation::ValidationError;
