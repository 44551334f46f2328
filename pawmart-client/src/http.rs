use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

/// Immutable connection settings shared by every API client.
///
/// Built once from [`Config`] and [`SessionStore`] and then handed to each
/// client, so there is no process-wide mutable default to reason about.
#[derive(Clone)]
pub struct HttpSettings {
    /// Joined directly with route suffixes; must end in `/`.
    pub base_url: String,
    /// Credential sent verbatim as the `Authorization` header. The backend
    /// issues the value with its scheme already attached.
    pub bearer_token: Option<String>,
}

// Keep the credential out of debug output
impl std::fmt::Debug for HttpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSettings")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.bearer_token.is_some())
            .finish()
    }
}

impl HttpSettings {
    pub fn from_parts(config: &Config, session: &SessionStore) -> Self {
        Self {
            base_url: config.api.base_url.clone(),
            bearer_token: session.access_token().map(str::to_owned),
        }
    }
}

/// Build the shared HTTP client: cookies on every request, JSON content
/// type, and the session credential when one is present.
pub fn build_http_client(settings: &HttpSettings) -> ClientResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = &settings.bearer_token {
        let value = HeaderValue::from_str(token)
            .map_err(|e| ClientError::Config(format!("invalid access token: {}", e)))?;
        headers.insert(AUTHORIZATION, value);
    }

    debug!(
        base_url = %settings.base_url,
        authenticated = settings.bearer_token.is_some(),
        "building HTTP client"
    );

    let client = Client::builder()
        .cookie_store(true)
        .default_headers(headers)
        .build()?;

    Ok(client)
}
