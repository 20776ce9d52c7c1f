//! Movie-review fixture loader for the tutorial `video` database.
//!
//! This crate resets the `reviews` collection and bulk-inserts a fixed set of
//! movie reviews into it, so tutorial queries always run against the same data.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use reviews_seed::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let store = MongoStore::connect(&config).await?;
//!
//! let summary = Seeder::new(store, &config)
//!     .run(&fixtures::movie_reviews())
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{
        DocumentStore, MemoryStore, MongoStore, ReviewCollection, SeedError, SeedState,
        SeedSummary, Seeder, StoreError,
    };
    pub use crate::fixtures;
    pub use crate::models::{Review, StoredReview};
}
