//! Review endpoints of the Pawmart backend.
//!
//! The backend accepts review content and star rating as request
//! parameters rather than a JSON body, so submissions go out as query
//! parameters. Review images are not carried by this client.

use reqwest::{Client, StatusCode};
use tracing::debug;

use pawmart_shared::models::envelope::{MultiResponse, SingleResponse};
use pawmart_shared::models::review::{ReviewDraft, ReviewResponse};

use crate::error::ClientResult;
use crate::http::{build_http_client, HttpSettings};

use super::{expect_json, expect_status};

/// Client for writing and browsing product reviews.
#[derive(Debug, Clone)]
pub struct ReviewApiClient {
    client: Client,
    settings: HttpSettings,
}

impl ReviewApiClient {
    pub fn new(settings: HttpSettings) -> ClientResult<Self> {
        let client = build_http_client(&settings)?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}{}", self.settings.base_url, suffix)
    }

    /// Write a review for a product.
    ///
    /// POST `review/{product_id}`
    pub async fn create_review(
        &self,
        product_id: i64,
        draft: &ReviewDraft,
    ) -> ClientResult<SingleResponse<ReviewResponse>> {
        let url = self.endpoint(&format!("review/{}", product_id));
        debug!(url = %url, product_id, star = draft.star, "creating review");

        let response = self.client.post(&url).query(draft).send().await?;
        expect_json(response, StatusCode::CREATED, "create review").await
    }

    /// Rewrite an existing review.
    ///
    /// PATCH `review/{review_id}`
    pub async fn update_review(
        &self,
        review_id: i64,
        draft: &ReviewDraft,
    ) -> ClientResult<SingleResponse<ReviewResponse>> {
        let url = self.endpoint(&format!("review/{}", review_id));
        debug!(url = %url, review_id, "updating review");

        let response = self.client.patch(&url).query(draft).send().await?;
        expect_json(response, StatusCode::OK, "update review").await
    }

    /// DELETE `review/{review_id}`
    pub async fn delete_review(&self, review_id: i64) -> ClientResult<()> {
        let url = self.endpoint(&format!("review/{}", review_id));
        debug!(url = %url, review_id, "deleting review");

        let response = self.client.delete(&url).send().await?;
        expect_status(response, StatusCode::NO_CONTENT, "delete review").await
    }

    /// GET `review/read/{review_id}`
    pub async fn get_review(
        &self,
        review_id: i64,
    ) -> ClientResult<SingleResponse<ReviewResponse>> {
        let url = self.endpoint(&format!("review/read/{}", review_id));
        debug!(url = %url, review_id, "fetching review");

        let response = self.client.get(&url).send().await?;
        expect_json(response, StatusCode::OK, "get review").await
    }

    /// List reviews left on a product, newest first.
    ///
    /// GET `review/{product_id}?page={page}`
    pub async fn list_product_reviews(
        &self,
        product_id: i64,
        page: u32,
    ) -> ClientResult<MultiResponse<ReviewResponse>> {
        let url = self.endpoint(&format!("review/{}", product_id));
        debug!(url = %url, product_id, page, "listing product reviews");

        let response = self.client.get(&url).query(&[("page", page)]).send().await?;
        expect_json(response, StatusCode::OK, "list product reviews").await
    }

    /// List reviews written by the signed-in user.
    ///
    /// GET `user/review?page={page}`
    pub async fn list_my_reviews(&self, page: u32) -> ClientResult<MultiResponse<ReviewResponse>> {
        let url = self.endpoint("user/review");
        debug!(url = %url, page, "listing own reviews");

        let response = self.client.get(&url).query(&[("page", page)]).send().await?;
        expect_json(response, StatusCode::OK, "list own reviews").await
    }
}
