//! Fixture seeding.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use thiserror::Error;
use tracing::{info, warn};

use super::store::{DocumentStore, ReviewCollection, StoreError};
use crate::config::SeedConfig;
use crate::models::Review;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Seeder is {actual}, expected {expected}")]
    OutOfOrder { expected: SeedState, actual: SeedState },
}

/// Where a [`Seeder`] is in its run. Runs only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedState {
    Disconnected,
    Selected,
    Cleared,
    Loaded,
}

impl fmt::Display for SeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedState::Disconnected => "disconnected",
            SeedState::Selected => "selected",
            SeedState::Cleared => "cleared",
            SeedState::Loaded => "loaded",
        };
        f.write_str(name)
    }
}

/// Outcome of a completed seed run.
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub database: String,
    pub collection: String,
    /// Store-assigned ids, in fixture order.
    pub inserted_ids: Vec<ObjectId>,
    /// Documents in the collection right after the load.
    pub document_count: u64,
}

impl SeedSummary {
    pub fn inserted(&self) -> usize {
        self.inserted_ids.len()
    }
}

/// Resets a collection and loads reviews into it.
pub struct Seeder<S: DocumentStore> {
    store: S,
    database: String,
    collection_name: String,
    collection: Option<S::Collection>,
    state: SeedState,
}

impl<S: DocumentStore> Seeder<S> {
    /// Creates a seeder targeting the database and collection named in `config`.
    pub fn new(store: S, config: &SeedConfig) -> Self {
        Self {
            store,
            database: config.database.clone(),
            collection_name: config.collection.clone(),
            collection: None,
            state: SeedState::Disconnected,
        }
    }

    pub fn state(&self) -> SeedState {
        self.state
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Selects the target database and collection. No I/O happens here.
    pub fn select(&mut self) -> Result<&S::Collection, SeedError> {
        self.expect_state(SeedState::Disconnected)?;

        let collection = self
            .collection
            .insert(self.store.collection(&self.database, &self.collection_name));
        self.state = SeedState::Selected;
        info!("Selected {}.{}", self.database, self.collection_name);

        Ok(collection)
    }

    /// Removes every document from the selected collection.
    pub async fn clear(&mut self) -> Result<(), SeedError> {
        let collection = self.selected(SeedState::Selected)?;

        info!("Clearing {}.{}...", self.database, self.collection_name);
        collection.clear().await?;

        self.state = SeedState::Cleared;
        Ok(())
    }

    /// Bulk-inserts `reviews` into the cleared collection.
    pub async fn load(&mut self, reviews: &[Review]) -> Result<Vec<ObjectId>, SeedError> {
        let collection = self.selected(SeedState::Cleared)?;

        info!("Seeding {} reviews...", reviews.len());
        let ids = collection.insert_many(reviews).await?;

        self.state = SeedState::Loaded;
        info!("Seeded {} reviews", ids.len());
        Ok(ids)
    }

    /// Runs select, clear and load in order, then counts the collection.
    pub async fn run(mut self, reviews: &[Review]) -> Result<SeedSummary, SeedError> {
        self.select()?;
        self.clear().await?;
        let inserted_ids = self.load(reviews).await?;

        let document_count = self.selected(SeedState::Loaded)?.count().await?;
        if document_count != inserted_ids.len() as u64 {
            warn!(
                "{}.{} holds {} documents after inserting {}; another seeder may have run concurrently",
                self.database,
                self.collection_name,
                document_count,
                inserted_ids.len()
            );
        }

        Ok(SeedSummary {
            database: self.database,
            collection: self.collection_name,
            inserted_ids,
            document_count,
        })
    }

    fn expect_state(&self, expected: SeedState) -> Result<(), SeedError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SeedError::OutOfOrder {
                expected,
                actual: self.state,
            })
        }
    }

    fn selected(&self, expected: SeedState) -> Result<&S::Collection, SeedError> {
        self.expect_state(expected)?;
        self.collection.as_ref().ok_or(SeedError::OutOfOrder {
            expected,
            actual: SeedState::Disconnected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn seeder() -> Seeder<MemoryStore> {
        Seeder::new(MemoryStore::new(), &SeedConfig::default())
    }

    #[tokio::test]
    async fn test_states_advance_in_order() {
        let mut seeder = seeder();
        assert_eq!(seeder.state(), SeedState::Disconnected);

        seeder.select().unwrap();
        assert_eq!(seeder.state(), SeedState::Selected);

        seeder.clear().await.unwrap();
        assert_eq!(seeder.state(), SeedState::Cleared);

        seeder
            .load(&[Review::rating_only(1, 3.0, "A")])
            .await
            .unwrap();
        assert_eq!(seeder.state(), SeedState::Loaded);
    }

    #[tokio::test]
    async fn test_load_before_clear_is_rejected() {
        let mut seeder = seeder();
        seeder.select().unwrap();

        let err = seeder
            .load(&[Review::rating_only(1, 3.0, "A")])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SeedError::OutOfOrder {
                expected: SeedState::Cleared,
                actual: SeedState::Selected
            }
        ));
        assert_eq!(seeder.state(), SeedState::Selected);
        assert!(!seeder.store().has_collection("video", "reviews").await);
    }

    #[tokio::test]
    async fn test_clear_before_select_is_rejected() {
        let mut seeder = seeder();

        let err = seeder.clear().await.unwrap_err();
        assert!(matches!(err, SeedError::OutOfOrder { .. }));
        assert_eq!(seeder.state(), SeedState::Disconnected);
    }

    #[tokio::test]
    async fn test_select_twice_is_rejected() {
        let mut seeder = seeder();
        seeder.select().unwrap();

        assert!(seeder.select().is_err());
    }

    #[test]
    fn test_out_of_order_message() {
        let err = SeedError::OutOfOrder {
            expected: SeedState::Cleared,
            actual: SeedState::Selected,
        };
        assert_eq!(err.to_string(), "Seeder is selected, expected cleared");
    }
}
