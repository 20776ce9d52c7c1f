//! In-process review store.
//!
//! Keeps raw BSON documents per namespace so partial documents behave the way
//! they do in MongoDB. Used by the test suite and for offline runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use tokio::sync::Mutex;

use super::store::{DocumentStore, ReviewCollection, StoreError};
use crate::models::{Review, StoredReview};

type Namespaces = HashMap<(String, String), Vec<Document>>;

/// Review store held entirely in memory. Clones share the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    namespaces: Arc<Mutex<Namespaces>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once `database.collection` has been written to and not dropped since.
    pub async fn has_collection(&self, database: &str, collection: &str) -> bool {
        self.namespaces
            .lock()
            .await
            .contains_key(&(database.to_string(), collection.to_string()))
    }

    /// Returns a copy of the raw documents in `database.collection`.
    pub async fn documents(&self, database: &str, collection: &str) -> Vec<Document> {
        self.namespaces
            .lock()
            .await
            .get(&(database.to_string(), collection.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    type Collection = MemoryReviews;

    fn collection(&self, database: &str, collection: &str) -> MemoryReviews {
        MemoryReviews {
            namespaces: Arc::clone(&self.namespaces),
            key: (database.to_string(), collection.to_string()),
        }
    }
}

/// A collection handle into a [`MemoryStore`].
#[derive(Clone, Debug)]
pub struct MemoryReviews {
    namespaces: Arc<Mutex<Namespaces>>,
    key: (String, String),
}

#[async_trait]
impl ReviewCollection for MemoryReviews {
    async fn clear(&self) -> Result<(), StoreError> {
        self.namespaces.lock().await.remove(&self.key);
        Ok(())
    }

    async fn insert_many(&self, reviews: &[Review]) -> Result<Vec<ObjectId>, StoreError> {
        // Encode everything first so a bad document leaves the collection untouched.
        let mut ids = Vec::with_capacity(reviews.len());
        let mut docs = Vec::with_capacity(reviews.len());
        for review in reviews {
            let id = ObjectId::new();
            let mut encoded = doc! { "_id": id };
            encoded.extend(bson::to_document(review)?);
            ids.push(id);
            docs.push(encoded);
        }

        self.namespaces
            .lock()
            .await
            .entry(self.key.clone())
            .or_default()
            .extend(docs);

        Ok(ids)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let namespaces = self.namespaces.lock().await;
        Ok(namespaces.get(&self.key).map_or(0, |docs| docs.len() as u64))
    }

    async fn find_by_reviewer(&self, reviewer_id: i64) -> Result<Vec<StoredReview>, StoreError> {
        let matching: Vec<Document> = {
            let namespaces = self.namespaces.lock().await;
            namespaces
                .get(&self.key)
                .map(|docs| {
                    docs.iter()
                        .filter(|d| d.get_i64("reviewer_id").ok() == Some(reviewer_id))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        };

        matching
            .into_iter()
            .map(|d| bson::from_document(d).map_err(StoreError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clear_missing_collection_is_noop() {
        let store = MemoryStore::new();
        let reviews = store.collection("video", "reviews");

        reviews.clear().await.unwrap();

        assert_eq!(reviews.count().await.unwrap(), 0);
        assert!(!store.has_collection("video", "reviews").await);
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids_in_order() {
        let store = MemoryStore::new();
        let reviews = store.collection("video", "reviews");
        let batch = vec![
            Review::new(1, 4.0, "A", "first"),
            Review::rating_only(1, 2.0, "B"),
        ];

        let ids = reviews.insert_many(&batch).await.unwrap();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);

        let found = reviews.find_by_reviewer(1).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, ids[0]);
        assert_eq!(found[0].review, batch[0]);
        assert_eq!(found[1].review.text, None);
    }

    #[tokio::test]
    async fn test_namespaces_are_isolated() {
        let store = MemoryStore::new();
        store
            .collection("video", "reviews")
            .insert_many(&[Review::rating_only(7, 1.0, "C")])
            .await
            .unwrap();

        assert_eq!(store.collection("video", "other").count().await.unwrap(), 0);
        assert_eq!(store.collection("audio", "reviews").count().await.unwrap(), 0);
        assert_eq!(store.documents("video", "reviews").await.len(), 1);
    }
}
