//! Actor seeding.

use casting_models::CreateActorDto;
use fake::Fake;
use fake::faker::name::en::Name;
use sqlx::PgPool;
use std::time::Instant;

const GENDERS: [&str; 3] = ["F", "M", "X"];

pub fn generate_actors(count: usize) -> Vec<CreateActorDto> {
    (0..count)
        .map(|_| CreateActorDto {
            name: Name().fake(),
            age: (18..80).fake(),
            gender: GENDERS[(0..GENDERS.len()).fake::<usize>()].to_string(),
        })
        .collect()
}

pub async fn seed_actors(
    db: &PgPool,
    count: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🎭 Seeding {} actors...", count);

    let actors = generate_actors(count);
    let ids = insert_actors_batch(db, &actors).await?;

    println!(
        "   ✓ Inserted {} actors in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Inserts all actors in one transaction using multi-row INSERT statements.
pub async fn insert_actors_batch(
    db: &PgPool,
    actors: &[CreateActorDto],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    const BATCH_SIZE: usize = 500;

    let mut tx = db.begin().await?;
    let mut all_ids = Vec::with_capacity(actors.len());

    for chunk in actors.chunks(BATCH_SIZE) {
        let mut query = String::from("INSERT INTO actors (name, age, gender) VALUES ");
        for i in 0..chunk.len() {
            if i > 0 {
                query.push_str(", ");
            }
            let p = i * 3;
            query.push_str(&format!("(${}, ${}, ${})", p + 1, p + 2, p + 3));
        }
        query.push_str(" RETURNING id");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for actor in chunk {
            q = q.bind(&actor.name).bind(actor.age).bind(&actor.gender);
        }
        all_ids.extend(q.fetch_all(&mut *tx).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}
