//! Database integration for seeding the review fixture.
//!
//! The [`Seeder`] drives any [`DocumentStore`] through select, clear and
//! bulk load. [`MongoStore`] talks to a real deployment; [`MemoryStore`]
//! keeps documents in process.

mod memory;
mod mongo;
mod seeder;
mod store;

pub use memory::{MemoryReviews, MemoryStore};
pub use mongo::{MongoReviews, MongoStore};
pub use seeder::{SeedError, SeedState, SeedSummary, Seeder};
pub use store::{DocumentStore, ReviewCollection, StoreError};
