//! Client SDK for the Pawmart commerce backend.
//!
//! Connection settings are built once from [`Config`] and [`SessionStore`]
//! and injected into each API client; the clients themselves are stateless
//! pass-throughs over the shared HTTP configuration.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use api::{OrderApiClient, ReviewApiClient};
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use http::{build_http_client, HttpSettings};
pub use session::SessionStore;
