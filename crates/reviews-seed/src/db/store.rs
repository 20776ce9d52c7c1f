//! Document store abstraction.

use async_trait::async_trait;
use mongodb::bson::{Bson, oid::ObjectId};
use thiserror::Error;

use crate::models::{Review, StoredReview};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("BSON encoding error: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),
    #[error("BSON decoding error: {0}")]
    BsonDecode(#[from] mongodb::bson::de::Error),
    #[error("Document {index} was assigned a non-ObjectId key: {id}")]
    UnexpectedId { index: usize, id: Bson },
    #[error("Store error: {0}")]
    Backend(String),
}

/// A schema-optional document store.
///
/// Selecting a collection performs no I/O; databases and collections come
/// into existence on first write.
pub trait DocumentStore: Send + Sync {
    type Collection: ReviewCollection;

    /// Returns a handle to `collection` inside `database`.
    fn collection(&self, database: &str, collection: &str) -> Self::Collection;
}

/// A named collection of review documents.
#[async_trait]
pub trait ReviewCollection: Send + Sync {
    /// Removes every document. A collection that does not exist is not an error.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Inserts all reviews in one ordered bulk call, returning the assigned
    /// identifiers in input order.
    async fn insert_many(&self, reviews: &[Review]) -> Result<Vec<ObjectId>, StoreError>;

    /// Counts the documents currently in the collection.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Fetches every review by `reviewer_id`, oldest insert first.
    async fn find_by_reviewer(&self, reviewer_id: i64) -> Result<Vec<StoredReview>, StoreError>;
}
