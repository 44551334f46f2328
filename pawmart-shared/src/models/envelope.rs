use serde::{Deserialize, Serialize};

/// Single-item response wrapper used across the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    pub data: T,
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiResponse<T> {
    pub data: Vec<T>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: i32,
    pub size: i32,
    pub total_elements: i64,
    pub total_pages: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::ReviewResponse;
    use serde_json::json;

    #[test]
    fn multi_response_deserializes_page_of_reviews() {
        let json_response = json!({
            "data": [
                {
                    "reviewId": 1,
                    "productId": 9,
                    "reviewContent": "Great kibble",
                    "star": 5,
                    "reviewUrl": "https://img.example.com/r/1.png",
                    "createdAt": "2023-11-20T09:30:00"
                }
            ],
            "pageInfo": {
                "page": 1,
                "size": 15,
                "totalElements": 31,
                "totalPages": 3
            }
        });

        let page: MultiResponse<ReviewResponse> = serde_json::from_value(json_response).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].review_id, 1);
        assert_eq!(page.page_info.total_elements, 31);
        assert_eq!(page.page_info.total_pages, 3);
    }

    #[test]
    fn single_response_unwraps_data_field() {
        let json_response = json!({
            "data": {
                "reviewId": 2,
                "productId": 9,
                "reviewContent": "Repurchasing",
                "star": 4,
                "reviewUrl": null,
                "createdAt": null
            }
        });

        let single: SingleResponse<ReviewResponse> = serde_json::from_value(json_response).unwrap();
        assert_eq!(single.data.review_id, 2);
        assert_eq!(single.data.star, 4);
    }
}
