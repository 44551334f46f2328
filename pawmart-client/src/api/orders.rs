//! Order endpoints of the Pawmart backend.

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use pawmart_shared::models::order::OrderId;

use crate::error::{ClientError, ClientResult};
use crate::http::{build_http_client, HttpSettings};

/// Client for placing orders and advancing their delivery status.
///
/// Both operations are single-shot: no retry, no caller-initiated abort,
/// and no coordination between in-flight calls.
#[derive(Debug, Clone)]
pub struct OrderApiClient {
    client: Client,
    settings: HttpSettings,
}

impl OrderApiClient {
    pub fn new(settings: HttpSettings) -> ClientResult<Self> {
        let client = build_http_client(&settings)?;
        Ok(Self { client, settings })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn endpoint(&self, suffix: &str) -> String {
        // Direct concatenation: the base URL carries the trailing slash.
        format!("{}{}", self.settings.base_url, suffix)
    }

    /// Place a new order.
    ///
    /// POST `orders`
    ///
    /// The payload passes through unmodified; [`OrderDraft`] is the shared
    /// contract shape, but any serializable value is accepted.
    ///
    /// [`OrderDraft`]: pawmart_shared::models::order::OrderDraft
    pub async fn create_order<P>(&self, payload: &P) -> ClientResult<Value>
    where
        P: Serialize + ?Sized,
    {
        let url = self.endpoint("orders");
        debug!(url = %url, "creating order");

        let response = self.client.post(&url).json(payload).send().await?;
        created(response, "create order").await
    }

    /// Mark an existing order as shipped.
    ///
    /// PATCH `orders/status/{order_id}`, no request body.
    pub async fn mark_shipped(&self, order_id: &OrderId) -> ClientResult<Value> {
        let url = self.endpoint(&format!("orders/status/{}", order_id));
        debug!(url = %url, order_id = %order_id, "marking order shipped");

        let response = self.client.patch(&url).send().await?;
        created(response, "mark order shipped").await
    }
}

/// The order endpoints answer 201 Created on success; anything else is a
/// failure, including other 2xx codes.
async fn created(response: Response, operation: &str) -> ClientResult<Value> {
    let status = response.status();
    if status == StatusCode::CREATED {
        let body = response.text().await?;
        info!(body = %body, "{} succeeded", operation);
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    } else {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        error!(status = %status, body = %body, "{} failed", operation);
        Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}
