mod common;

use axum::http::StatusCode;
use common::{
    STUDENTS_URL, count_course_students, create_test_course, create_test_student, enroll, send,
    student_url,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student(pool: PgPool) {
    let (status, body) = send(
        &pool,
        "POST",
        STUDENTS_URL,
        Some(json!({ "name": "Ada Lovelace", "birth_date": "2000-12-10" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["birth_date"], "2000-12-10");
    assert!(body["id"].is_i64());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_invalid_birth_date(pool: PgPool) {
    let (status, _) = send(
        &pool,
        "POST",
        STUDENTS_URL,
        Some(json!({ "name": "Ada", "birth_date": "not-a-date" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_student(pool: PgPool) {
    let student = create_test_student(&pool).await;

    let (status, body) = send(&pool, "GET", &student_url(student.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], student.id);
    assert_eq!(body["name"], student.name);
    assert!(body["birth_date"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_students_in_creation_order(pool: PgPool) {
    let first = create_test_student(&pool).await;
    let second = create_test_student(&pool).await;

    let (status, body) = send(&pool, "GET", STUDENTS_URL, None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_filter_students_by_name(pool: PgPool) {
    create_test_student(&pool).await;
    send(
        &pool,
        "POST",
        STUDENTS_URL,
        Some(json!({ "name": "Grace Hopper" })),
    )
    .await;

    let uri = format!("{}?name=Grace%20Hopper", STUDENTS_URL);
    let (status, body) = send(&pool, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body.as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Grace Hopper");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_student_drops_enrollments(pool: PgPool) {
    let course = create_test_course(&pool).await;
    let student = create_test_student(&pool).await;
    enroll(&pool, course.id, student.id).await;

    let (status, _) = send(&pool, "DELETE", &student_url(student.id), None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(count_course_students(&pool, course.id).await, 0);

    let (status, _) = send(&pool, "GET", &student_url(student.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
