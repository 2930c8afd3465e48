//! Fake data generation and bulk insertion.

pub mod actors;
pub mod catalog;
pub mod movies;

use sqlx::PgPool;
use std::time::Instant;

pub use actors::{generate_actors, seed_actors};
pub use catalog::{generate_links, seed_links};
pub use movies::{generate_movies, seed_movies};

/// How many rows of each kind to create.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub actors: usize,
    pub movies: usize,
    /// Actor/movie pairs to link. Capped at `actors * movies`.
    pub links: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            actors: 20,
            movies: 10,
            links: 30,
        }
    }
}

impl SeedConfig {
    pub fn new(actors: usize, movies: usize) -> Self {
        Self {
            actors,
            movies,
            ..Default::default()
        }
    }

    pub fn with_links(mut self, links: usize) -> Self {
        self.links = links;
        self
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub actors: usize,
    pub movies: usize,
    pub links: usize,
}

pub async fn seed_all(
    db: &PgPool,
    config: SeedConfig,
) -> Result<SeedSummary, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Seeding database...\n");

    let actor_ids = seed_actors(db, config.actors).await?;
    let movie_ids = seed_movies(db, config.movies).await?;
    let links = seed_links(db, &actor_ids, &movie_ids, config.links).await?;

    let summary = SeedSummary {
        actors: actor_ids.len(),
        movies: movie_ids.len(),
        links,
    };

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    println!("   Actors: {}", summary.actors);
    println!("   Movies: {}", summary.movies);
    println!("   Links:  {}", summary.links);

    Ok(summary)
}
