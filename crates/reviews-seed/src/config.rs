//! Configuration for seeding operations.

use serde::{Deserialize, Serialize};

/// Connection string used when `MONGODB_URI` is not set.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Database the tutorial queries run against.
pub const DEFAULT_DATABASE: &str = "video";

/// Collection holding the review fixture.
pub const DEFAULT_COLLECTION: &str = "reviews";

/// Application name reported to the server in the connection handshake.
pub const DEFAULT_APP_NAME: &str = "reviews-seed";

/// Configuration for seeding operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// MongoDB connection string.
    pub mongodb_uri: String,

    /// Target database name. Created on first write if absent.
    pub database: String,

    /// Target collection name. Dropped and refilled on every run.
    pub collection: String,

    /// Client application name.
    pub app_name: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

impl SeedConfig {
    /// Builds the default configuration, taking the connection string from
    /// `MONGODB_URI` when it is set.
    ///
    /// Database and collection names are fixed; only the server location varies.
    pub fn from_env() -> Self {
        let mongodb_uri =
            std::env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());

        Self {
            mongodb_uri,
            ..Self::default()
        }
    }

    /// Overrides the connection string.
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongodb_uri = uri.into();
        self
    }

    /// Overrides the target database, mainly so tests can seed a scratch database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// `database.collection`, the namespace string used in log output.
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
