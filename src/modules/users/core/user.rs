use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user record. `version` and the timestamps are owned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub address: String,
    pub nickname: String,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create input. Missing keys decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub nickname: String,
}

/// Partial update. `None` keeps the stored value, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl UpdateFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.nickname.is_none()
    }
}
