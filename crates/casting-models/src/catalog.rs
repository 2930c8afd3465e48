use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Links an actor to a movie. Rows disappear with either side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogEntry {
    pub id: i64,
    pub actor_id: i64,
    pub movie_id: i64,
}
