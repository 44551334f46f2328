use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Review submission parameters.
///
/// The backend takes these as request parameters, not a JSON body, so the
/// serialized field names must match the parameter names exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    #[serde(rename = "reviewContent")]
    pub content: String,
    /// Star rating, 1 to 5.
    pub star: i32,
}

/// Review record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: i64,
    pub product_id: i64,
    pub review_content: String,
    pub star: i32,
    /// Uploaded review image, when one was attached.
    pub review_url: Option<String>,
    // Backend timestamps carry no zone offset.
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn review_draft_serializes_to_backend_parameter_names() {
        let draft = ReviewDraft {
            content: "My dog loves it".to_string(),
            star: 5,
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, json!({"reviewContent": "My dog loves it", "star": 5}));
    }

    #[test]
    fn review_response_deserializes_backend_json() {
        let json_response = json!({
            "reviewId": 11,
            "productId": 3,
            "reviewContent": "Picky eater approved",
            "star": 4,
            "reviewUrl": null,
            "createdAt": "2023-12-01T12:00:00"
        });

        let review: ReviewResponse = serde_json::from_value(json_response).unwrap();
        assert_eq!(review.review_id, 11);
        assert_eq!(review.product_id, 3);
        assert_eq!(review.star, 4);
        assert!(review.review_url.is_none());
        assert!(review.created_at.is_some());
    }
}
