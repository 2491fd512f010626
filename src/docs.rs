use utoipa::OpenApi;

use courseware_core::ErrorResponse;

use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};
use crate::modules::students::model::{CreateStudentDto, Student};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            Student,
            CreateStudentDto,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Courses", description = "Course management endpoints"),
        (name = "Students", description = "Student management endpoints")
    ),
    info(
        title = "Courseware API",
        version = "0.1.0",
        description = "Courses and their enrolled students, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
