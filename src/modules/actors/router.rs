use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{create_actor, delete_actor, get_actors, update_actor};

pub fn init_actors_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_actors).post(create_actor))
        .route("/{id}", patch(update_actor).delete(delete_actor))
}
