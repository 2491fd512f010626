use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_course, delete_course, get_course, get_courses, update_course};

/// Course routes, relative to `/api/v1`.
///
/// Each path is registered with and without the trailing slash.
pub fn init_courses_router() -> Router<AppState> {
    let collection = post(create_course).get(get_courses);
    let item = get(get_course).patch(update_course).delete(delete_course);

    Router::new()
        .route("/courses", collection.clone())
        .route("/courses/", collection)
        .route("/courses/{id}", item.clone())
        .route("/courses/{id}/", item)
}
