use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_student, delete_student, get_student, get_students};

/// Student routes, relative to `/api/v1`.
pub fn init_students_router() -> Router<AppState> {
    let collection = post(create_student).get(get_students);
    let item = get(get_student).delete(delete_student);

    Router::new()
        .route("/students", collection.clone())
        .route("/students/", collection)
        .route("/students/{id}", item.clone())
        .route("/students/{id}/", item)
}
