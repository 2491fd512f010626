use axum::body::Body;
use axum::http::{Request, StatusCode};
use courseware::router::init_router;
use courseware::state::AppState;
use courseware_config::CorsConfig;
use fake::Fake;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

#[allow(dead_code)]
pub const COURSES_URL: &str = "/api/v1/courses/";
#[allow(dead_code)]
pub const STUDENTS_URL: &str = "/api/v1/students/";

#[allow(dead_code)]
pub struct TestCourse {
    pub id: i64,
    pub name: String,
}

#[allow(dead_code)]
pub struct TestStudent {
    pub id: i64,
    pub name: String,
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(AppState::new(pool, CorsConfig::default()))
}

/// Sends one request through a fresh router and returns status plus JSON body.
///
/// Empty bodies (e.g. 204) come back as `Value::Null`.
pub async fn send(
    pool: &PgPool,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = setup_test_app(pool.clone())
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

#[allow(dead_code)]
pub fn course_url(id: i64) -> String {
    format!("{}{}/", COURSES_URL, id)
}

#[allow(dead_code)]
pub fn student_url(id: i64) -> String {
    format!("{}{}/", STUDENTS_URL, id)
}

/// Course row with a random name.
#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool) -> TestCourse {
    let name = format!("{}_{}", Word().fake::<String>(), (1..1_000_000).fake::<u32>());
    create_named_course(pool, &name).await
}

#[allow(dead_code)]
pub async fn create_named_course(pool: &PgPool, name: &str) -> TestCourse {
    let (id, name): (i64, String) =
        sqlx::query_as("INSERT INTO courses (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap();

    TestCourse { id, name }
}

/// Creates `quantity` courses, oldest first.
#[allow(dead_code)]
pub async fn create_test_courses(pool: &PgPool, quantity: usize) -> Vec<TestCourse> {
    let mut courses = Vec::with_capacity(quantity);
    for _ in 0..quantity {
        courses.push(create_test_course(pool).await);
    }
    courses
}

#[allow(dead_code)]
pub async fn create_test_student(pool: &PgPool) -> TestStudent {
    let (id, name): (i64, String) =
        sqlx::query_as("INSERT INTO students (name) VALUES ($1) RETURNING id, name")
            .bind(Name().fake::<String>())
            .fetch_one(pool)
            .await
            .unwrap();

    TestStudent { id, name }
}

#[allow(dead_code)]
pub async fn enroll(pool: &PgPool, course_id: i64, student_id: i64) {
    sqlx::query("INSERT INTO course_students (course_id, student_id) VALUES ($1, $2)")
        .bind(course_id)
        .bind(student_id)
        .execute(pool)
        .await
        .unwrap();
}

#[allow(dead_code)]
pub async fn count_courses(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn count_course_students(pool: &PgPool, course_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM course_students WHERE course_id = $1")
        .bind(course_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
