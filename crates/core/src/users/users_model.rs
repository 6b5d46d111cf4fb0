//! User domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An account holder who owns entries and authenticates via email/password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Surrogate id, `None` until the user is persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Unique across all users, enforced at registration time.
    pub email: String,
    /// Opaque secret, compared for exact equality. Never serialized outward
    /// and never logged.
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Registration date, stamped by the storage layer at insert when absent.
    pub recorded_at: Option<NaiveDate>,
}
