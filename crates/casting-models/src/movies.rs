//! Movie models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::date::{self, ReleaseDate};
use crate::patch::Patch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(with = "date")]
    #[schema(value_type = String, example = "01-01-2030")]
    pub release_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMovieDto {
    #[validate(length(min = 1))]
    #[schema(example = "The Long Take")]
    pub title: String,
    /// `MM-DD-YYYY` or `YYYY-MM-DD`
    #[serde(with = "date")]
    #[schema(value_type = String, example = "01-01-2030")]
    pub release_date: NaiveDate,
}

/// Every field must be present. `""` leaves the stored value unchanged.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateMovieDto {
    #[schema(value_type = String, example = "")]
    pub title: Patch<String>,
    #[schema(value_type = String, example = "01-01-2030")]
    pub release_date: Patch<ReleaseDate>,
}

impl UpdateMovieDto {
    pub fn apply(self, movie: &mut Movie) {
        self.title.apply_to(&mut movie.title);
        if let Patch::Set(release_date) = self.release_date {
            movie.release_date = release_date.into();
        }
    }
}

/// Body of `GET /movies`.
///
/// `movies` is a flat array, the same shape as the actors list. Earlier releases
/// wrapped it in a second array (`"movies": [[...]]`); clients must not expect that.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieListResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
    pub total_movies: usize,
}

impl MovieListResponse {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            success: true,
            total_movies: movies.len(),
            movies,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MoviesResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
}

impl MoviesResponse {
    pub fn single(movie: Movie) -> Self {
        Self {
            success: true,
            movies: vec![movie],
        }
    }
}
