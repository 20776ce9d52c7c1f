//! MongoDB-backed review store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{Bson, doc, oid::ObjectId},
    options::ClientOptions,
};
use tracing::debug;

use super::store::{DocumentStore, ReviewCollection, StoreError};
use crate::config::SeedConfig;
use crate::models::{Review, StoredReview};

/// Review store backed by a MongoDB deployment.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
}

impl MongoStore {
    /// Creates a client for `config.mongodb_uri`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first collection operation rather than here.
    pub async fn connect(config: &SeedConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.mongodb_uri.as_str()).await?;
        options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(options)?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the client for advanced usage.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl DocumentStore for MongoStore {
    type Collection = MongoReviews;

    fn collection(&self, database: &str, collection: &str) -> MongoReviews {
        MongoReviews {
            inner: self.client.database(database).collection(collection),
        }
    }
}

/// A `reviews` collection in MongoDB.
#[derive(Clone, Debug)]
pub struct MongoReviews {
    inner: Collection<Review>,
}

#[async_trait]
impl ReviewCollection for MongoReviews {
    async fn clear(&self) -> Result<(), StoreError> {
        // The driver ignores NamespaceNotFound on drop.
        self.inner.drop().await?;
        debug!("Dropped {}", self.inner.namespace());
        Ok(())
    }

    async fn insert_many(&self, reviews: &[Review]) -> Result<Vec<ObjectId>, StoreError> {
        let result = self.inner.insert_many(reviews).await?;

        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_unstable_by_key(|(index, _)| *index);

        ids.into_iter()
            .map(|(index, id)| match id {
                Bson::ObjectId(oid) => Ok(oid),
                other => Err(StoreError::UnexpectedId { index, id: other }),
            })
            .collect()
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.inner.count_documents(doc! {}).await?)
    }

    async fn find_by_reviewer(&self, reviewer_id: i64) -> Result<Vec<StoredReview>, StoreError> {
        let stored: Vec<StoredReview> = self
            .inner
            .clone_with_type::<StoredReview>()
            .find(doc! { "reviewer_id": reviewer_id })
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(stored)
    }
}
