//! Movie seeding.

use casting_models::CreateMovieDto;
use chrono::{Duration, NaiveDate};
use fake::Fake;
use fake::faker::lorem::en::Words;
use sqlx::PgPool;
use std::time::Instant;

/// Release dates fall within forty years of this day.
const EARLIEST_RELEASE: (i32, u32, u32) = (1990, 1, 1);
const RELEASE_WINDOW_DAYS: i64 = 365 * 40;

fn title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn generate_movies(count: usize) -> Vec<CreateMovieDto> {
    let (y, m, d) = EARLIEST_RELEASE;
    let earliest = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);

    (0..count)
        .map(|_| {
            let words: Vec<String> = Words(1..4).fake();
            let offset: i64 = (0..RELEASE_WINDOW_DAYS).fake();

            CreateMovieDto {
                title: title_case(&words),
                release_date: earliest + Duration::days(offset),
            }
        })
        .collect()
}

pub async fn seed_movies(
    db: &PgPool,
    count: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🎬 Seeding {} movies...", count);

    let movies = generate_movies(count);
    let ids = insert_movies_batch(db, &movies).await?;

    println!(
        "   ✓ Inserted {} movies in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_movies_batch(
    db: &PgPool,
    movies: &[CreateMovieDto],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    const BATCH_SIZE: usize = 500;

    let mut tx = db.begin().await?;
    let mut all_ids = Vec::with_capacity(movies.len());

    for chunk in movies.chunks(BATCH_SIZE) {
        let mut query = String::from("INSERT INTO movies (title, release_date) VALUES ");
        for i in 0..chunk.len() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push_str(&format!("(${}, ${})", i * 2 + 1, i * 2 + 2));
        }
        query.push_str(" RETURNING id");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for movie in chunk {
            q = q.bind(&movie.title).bind(movie.release_date);
        }
        all_ids.extend(q.fetch_all(&mut *tx).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}
