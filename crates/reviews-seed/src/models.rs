//! Review documents as written to and read back from the store.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A single movie review.
///
/// Documents are schema-optional: a review without `text` is stored with no
/// `text` key at all rather than an explicit null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer identifier. Not unique across reviews.
    pub reviewer_id: i64,
    /// Star rating, 0.0 to 5.0 in half steps.
    pub rating: f64,
    /// Reviewer display name.
    pub reviewer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Review {
    /// Creates a review with body text.
    pub fn new(
        reviewer_id: i64,
        rating: f64,
        reviewer: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            reviewer_id,
            rating,
            reviewer: reviewer.into(),
            text: Some(text.into()),
        }
    }

    /// Creates a rating-only review with no body text.
    pub fn rating_only(reviewer_id: i64, rating: f64, reviewer: impl Into<String>) -> Self {
        Self {
            reviewer_id,
            rating,
            reviewer: reviewer.into(),
            text: None,
        }
    }
}

/// A review together with the identifier the store assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReview {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub review: Review,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_missing_text_is_omitted_not_null() {
        let review = Review::rating_only(759723314, 3.5, "Emile T");

        let doc = bson::to_document(&review).unwrap();
        assert!(!doc.contains_key("text"));
        assert_eq!(doc.get_i64("reviewer_id").unwrap(), 759723314);

        let json = serde_json::to_value(&review).unwrap();
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_stored_review_without_text_decodes() {
        let id = ObjectId::new();
        let doc = bson::doc! {
            "_id": id,
            "reviewer_id": 759723314_i64,
            "rating": 3.5,
            "reviewer": "Emile T",
        };

        let stored: StoredReview = bson::from_document(doc).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.review.text, None);
        assert_eq!(stored.review.reviewer, "Emile T");
    }
}
