use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{create_movie, delete_movie, get_movies, update_movie};

pub fn init_movies_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_movies).post(create_movie))
        .route("/{id}", patch(update_movie).delete(delete_movie))
}
