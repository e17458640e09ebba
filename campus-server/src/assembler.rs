//! Response assembly
//!
//! Turns store entities plus resolved children into the nested JSON shapes. Expansion
//! is fixed at one level: an entity embedded in another response is built with the
//! shallow `From` conversions below, so its own associations are always empty or null.
//! Nothing in here touches the database.

use serde::{Deserialize, Serialize};

use crate::db::aggregate::{take_children, ChildrenByParent};
use crate::models::{
    Course, CourseWithTeacher, Department, DepartmentWithHead, Student, Teacher,
    TeacherWithDepartment,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub courses: Vec<CourseResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub teacher: Option<Box<TeacherResponse>>,
    pub students: Vec<StudentResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub id: i64,
    pub name: String,
    pub department: Option<Box<DepartmentResponse>>,
    pub courses: Vec<CourseResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: i64,
    pub name: String,
    pub head_of_department: Option<Box<TeacherResponse>>,
}

// Shallow forms: scalar fields only, every association empty.

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            courses: Vec::new(),
        }
    }
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            teacher: None,
            students: Vec::new(),
        }
    }
}

impl From<Teacher> for TeacherResponse {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            name: teacher.name,
            department: None,
            courses: Vec::new(),
        }
    }
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            head_of_department: None,
        }
    }
}

fn shallow<E, R: From<E>>(entities: Vec<E>) -> Vec<R> {
    entities.into_iter().map(R::from).collect()
}

// One-level expansions.

impl StudentResponse {
    pub fn assemble(student: Student, courses: Vec<Course>) -> Self {
        Self {
            courses: shallow(courses),
            ..Self::from(student)
        }
    }
}

impl CourseResponse {
    pub fn assemble(joined: CourseWithTeacher, students: Vec<Student>) -> Self {
        Self {
            teacher: joined.teacher.map(|t| Box::new(TeacherResponse::from(t))),
            students: shallow(students),
            ..Self::from(joined.course)
        }
    }
}

impl TeacherResponse {
    pub fn assemble(joined: TeacherWithDepartment, courses: Vec<Course>) -> Self {
        Self {
            department: joined
                .department
                .map(|d| Box::new(DepartmentResponse::from(d))),
            courses: shallow(courses),
            ..Self::from(joined.teacher)
        }
    }
}

impl DepartmentResponse {
    pub fn assemble(joined: DepartmentWithHead) -> Self {
        Self {
            head_of_department: joined.head.map(|t| Box::new(TeacherResponse::from(t))),
            ..Self::from(joined.department)
        }
    }
}

// List forms: each parent takes its children from the batch map, empty on a miss.

pub fn assemble_students(
    students: Vec<Student>,
    mut courses: ChildrenByParent<Course>,
) -> Vec<StudentResponse> {
    students
        .into_iter()
        .map(|student| {
            let children = take_children(&mut courses, student.id);
            StudentResponse::assemble(student, children)
        })
        .collect()
}

pub fn assemble_courses(
    courses: Vec<CourseWithTeacher>,
    mut students: ChildrenByParent<Student>,
) -> Vec<CourseResponse> {
    courses
        .into_iter()
        .map(|joined| {
            let children = take_children(&mut students, joined.course.id);
            CourseResponse::assemble(joined, children)
        })
        .collect()
}

pub fn assemble_teachers(
    teachers: Vec<TeacherWithDepartment>,
    mut courses: ChildrenByParent<Course>,
) -> Vec<TeacherResponse> {
    teachers
        .into_iter()
        .map(|joined| {
            let children = take_children(&mut courses, joined.teacher.id);
            TeacherResponse::assemble(joined, children)
        })
        .collect()
}

pub fn assemble_departments(departments: Vec<DepartmentWithHead>) -> Vec<DepartmentResponse> {
    departments
        .into_iter()
        .map(DepartmentResponse::assemble)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::aggregate::group_by_parent;

    fn course(id: i64, title: &str, teacher_id: Option<i64>) -> Course {
        Course {
            id,
            title: title.into(),
            teacher_id,
        }
    }

    fn alice() -> Student {
        Student {
            id: 1,
            name: "Alice".into(),
            email: "a@x.com".into(),
        }
    }

    #[test]
    fn course_teacher_is_shallow_even_when_teacher_has_courses() {
        let turing = Teacher {
            id: 7,
            name: "Turing".into(),
        };
        let joined = CourseWithTeacher {
            course: course(2, "Math", Some(7)),
            teacher: Some(turing),
        };

        let response = CourseResponse::assemble(joined, vec![alice()]);

        let teacher = response.teacher.expect("teacher embedded");
        assert_eq!(teacher.name, "Turing");
        assert!(teacher.courses.is_empty());
        assert!(teacher.department.is_none());
        assert_eq!(response.students.len(), 1);
        assert!(response.students[0].courses.is_empty());
    }

    #[test]
    fn student_courses_are_shallow() {
        let response = StudentResponse::assemble(alice(), vec![course(2, "Math", Some(7))]);

        assert_eq!(response.courses.len(), 1);
        assert_eq!(response.courses[0].title, "Math");
        assert!(response.courses[0].teacher.is_none());
        assert!(response.courses[0].students.is_empty());
    }

    #[test]
    fn teacher_department_has_no_head_expanded() {
        let joined = TeacherWithDepartment {
            teacher: Teacher {
                id: 3,
                name: "Hopper".into(),
            },
            department: Some(Department {
                id: 9,
                name: "Computing".into(),
                head_of_department_id: Some(3),
            }),
        };

        let response = TeacherResponse::assemble(joined, vec![course(4, "Compilers", Some(3))]);

        let department = response.department.expect("department embedded");
        assert_eq!(department.name, "Computing");
        assert!(department.head_of_department.is_none());
        assert!(response.courses[0].teacher.is_none());
    }

    #[test]
    fn department_head_is_shallow() {
        let joined = DepartmentWithHead {
            department: Department {
                id: 1,
                name: "Physics".into(),
                head_of_department_id: Some(4),
            },
            head: Some(Teacher {
                id: 4,
                name: "Curie".into(),
            }),
        };

        let response = DepartmentResponse::assemble(joined);

        let head = response.head_of_department.expect("head embedded");
        assert_eq!(head.id, 4);
        assert!(head.department.is_none());
        assert!(head.courses.is_empty());
    }

    #[test]
    fn list_assembly_defaults_missing_parents_to_empty() {
        let students = vec![
            alice(),
            Student {
                id: 2,
                name: "Bob".into(),
                email: "b@x.com".into(),
            },
            Student {
                id: 3,
                name: "Carol".into(),
                email: "c@x.com".into(),
            },
        ];
        let courses = group_by_parent(vec![
            (1, course(10, "x", None)),
            (3, course(11, "y", None)),
            (3, course(12, "z", None)),
        ]);

        let responses = assemble_students(students, courses);

        let titles: Vec<Vec<&str>> = responses
            .iter()
            .map(|r| r.courses.iter().map(|c| c.title.as_str()).collect())
            .collect();
        assert_eq!(titles, vec![vec!["x"], vec![], vec!["y", "z"]]);
    }

    #[test]
    fn serializes_camel_case_with_null_references() {
        let response = DepartmentResponse::from(Department {
            id: 1,
            name: "Physics".into(),
            head_of_department_id: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Physics", "headOfDepartment": null })
        );
    }
}
