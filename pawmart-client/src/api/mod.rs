pub mod orders;
pub mod reviews;

pub use orders::OrderApiClient;
pub use reviews::ReviewApiClient;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{ClientError, ClientResult};

/// Deserialize the response body after checking the expected status.
pub(crate) async fn expect_json<T>(
    response: Response,
    expected: StatusCode,
    operation: &str,
) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    if response.status() == expected {
        let parsed = response.json::<T>().await?;
        debug!("{} succeeded", operation);
        Ok(parsed)
    } else {
        Err(reject(response, operation).await)
    }
}

/// Check the expected status for endpoints whose body carries nothing.
pub(crate) async fn expect_status(
    response: Response,
    expected: StatusCode,
    operation: &str,
) -> ClientResult<()> {
    if response.status() == expected {
        debug!("{} succeeded", operation);
        Ok(())
    } else {
        Err(reject(response, operation).await)
    }
}

async fn reject(response: Response, operation: &str) -> ClientError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    error!(status = %status, body = %body, "{} failed", operation);
    ClientError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    }
}
