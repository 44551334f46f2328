use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token addressing an existing order.
///
/// The backend issues numeric identifiers today; the client keeps the value
/// as an opaque string so the wire contract can change without touching
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// Shared contract for the create-order request body.
///
/// The order endpoint accepts any JSON payload; this is the shape agreed
/// with the backend for regular buyer checkouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub order_items: Vec<OrderItemDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDraft {
    pub product_id: i64,
    pub quantity: i32,
}
