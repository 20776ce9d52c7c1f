//! Loads the movie-review fixture into `video.reviews`
//!
//! Run with:
//! ```
//! MONGODB_URI=mongodb://localhost:27017 cargo run -p reviews-seed --bin seed
//! ```

use reviews_seed::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();

    tracing::info!("Seeding {}", config.namespace());

    let store = MongoStore::connect(&config).await?;

    let reviews = fixtures::movie_reviews();
    let summary = Seeder::new(store, &config).run(&reviews).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Namespace: {}.{}", summary.database, summary.collection);
    tracing::info!("  Inserted: {}", summary.inserted());
    tracing::info!("  Documents: {}", summary.document_count);

    Ok(())
}
