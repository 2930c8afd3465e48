use casting_cli::seeder::{self, SeedConfig};
use casting_config::DatabaseConfig;
use casting_db::{PgStore, init_db_pool};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "casting-cli")]
#[command(about = "Casting Agency CLI - Database administration tools", long_about = None)]
struct Cli {
    /// Target another database on the same server (e.g. the test database)
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Seed the database with fake actors, movies, and catalog links
    Seed {
        /// Number of actors to create
        #[arg(short = 'a', long, default_value = "20")]
        actors: usize,

        /// Number of movies to create
        #[arg(short = 'm', long, default_value = "10")]
        movies: usize,

        /// Number of actor/movie links to create
        #[arg(short = 'l', long, default_value = "30")]
        links: usize,
    },
    /// Delete every actor, movie and link (keeps the schema)
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Drop all tables and recreate them from the migrations
    DropAndCreate {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let mut config = DatabaseConfig::from_env();
    if let Some(name) = &cli.database {
        config = config.for_database(name);
    }

    let pool = match init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    let store = PgStore::new(pool);

    match cli.command {
        Commands::Migrate => handle_migrate(&store).await,
        Commands::Seed {
            actors,
            movies,
            links,
        } => handle_seed(&store, SeedConfig::new(actors, movies).with_links(links)).await,
        Commands::Clear { yes } => handle_clear(&store, &config, yes).await,
        Commands::DropAndCreate { yes } => handle_drop_and_create(&store, &config, yes).await,
    }
}

fn confirm(prompt: &str, skip: bool) -> bool {
    if skip {
        return true;
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

async fn handle_migrate(store: &PgStore) {
    match store.migrate().await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("\n❌ Error running migrations: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(store: &PgStore, config: SeedConfig) {
    if let Err(e) = store.migrate().await {
        eprintln!("\n❌ Error running migrations: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = seeder::seed_all(store.pool(), config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear(store: &PgStore, config: &DatabaseConfig, yes: bool) {
    let prompt = format!("Delete all actors, movies and links in '{}'?", config.name);
    if !confirm(&prompt, yes) {
        println!("Aborted.");
        return;
    }

    match store.clear_all().await {
        Ok(()) => println!("✅ Cleared all rows"),
        Err(e) => {
            eprintln!("\n❌ Error clearing database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_drop_and_create(store: &PgStore, config: &DatabaseConfig, yes: bool) {
    let prompt = format!("Drop and recreate every table in '{}'?", config.name);
    if !confirm(&prompt, yes) {
        println!("Aborted.");
        return;
    }

    match store.drop_and_create().await {
        Ok(()) => println!("✅ Tables dropped and recreated"),
        Err(e) => {
            eprintln!("\n❌ Error recreating tables: {}", e);
            std::process::exit(1);
        }
    }
}
