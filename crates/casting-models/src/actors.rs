//! Actor models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::patch::Patch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateActorDto {
    #[validate(length(min = 1))]
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = 30)]
    pub age: i32,
    #[validate(length(min = 1))]
    #[schema(example = "F")]
    pub gender: String,
}

/// Every field must be present. `""` leaves the stored value unchanged.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateActorDto {
    #[schema(value_type = String, example = "")]
    pub name: Patch<String>,
    /// An integer, or `""` to keep the current age
    #[schema(value_type = i32, example = 31)]
    pub age: Patch<i32>,
    #[schema(value_type = String, example = "")]
    pub gender: Patch<String>,
}

impl UpdateActorDto {
    pub fn apply(self, actor: &mut Actor) {
        self.name.apply_to(&mut actor.name);
        self.age.apply_to(&mut actor.age);
        self.gender.apply_to(&mut actor.gender);
    }
}

/// Body of `GET /actors`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActorListResponse {
    pub success: bool,
    pub actors: Vec<Actor>,
    pub total_actors: usize,
}

impl ActorListResponse {
    pub fn new(actors: Vec<Actor>) -> Self {
        Self {
            success: true,
            total_actors: actors.len(),
            actors,
        }
    }
}

/// Body of create and update responses: the affected actor in a one-element list.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActorsResponse {
    pub success: bool,
    pub actors: Vec<Actor>,
}

impl ActorsResponse {
    pub fn single(actor: Actor) -> Self {
        Self {
            success: true,
            actors: vec![actor],
        }
    }
}
