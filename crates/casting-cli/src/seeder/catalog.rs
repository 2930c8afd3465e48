//! Actor/movie link seeding.

use fake::Fake;
use sqlx::PgPool;
use std::collections::HashSet;
use std::time::Instant;

/// Picks up to `count` distinct random (actor, movie) pairs.
pub fn generate_links(actor_ids: &[i64], movie_ids: &[i64], count: usize) -> Vec<(i64, i64)> {
    let possible = actor_ids.len() * movie_ids.len();
    let target = count.min(possible);
    let mut links = HashSet::with_capacity(target);

    while links.len() < target {
        let actor = actor_ids[(0..actor_ids.len()).fake::<usize>()];
        let movie = movie_ids[(0..movie_ids.len()).fake::<usize>()];
        links.insert((actor, movie));
    }

    let mut links: Vec<(i64, i64)> = links.into_iter().collect();
    links.sort_unstable();
    links
}

pub async fn seed_links(
    db: &PgPool,
    actor_ids: &[i64],
    movie_ids: &[i64],
    count: usize,
) -> Result<usize, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    let links = generate_links(actor_ids, movie_ids, count);
    println!("🔗 Linking {} actor/movie pairs...", links.len());

    let mut tx = db.begin().await?;
    let mut inserted = 0;
    for (actor_id, movie_id) in &links {
        let result = sqlx::query(
            "INSERT INTO catalog (actor_id, movie_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(actor_id)
        .bind(movie_id)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected() as usize;
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} links in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}
