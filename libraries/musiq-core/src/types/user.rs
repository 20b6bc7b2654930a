/// User domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier (UUID)
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Avatar image reference
    #[serde(default)]
    pub avatar: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with a fresh v4 id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            avatar: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Whether the id is a UUID (older clients stored arbitrary strings)
    pub fn has_uuid_id(&self) -> bool {
        uuid::Uuid::parse_str(&self.id).is_ok()
    }
}
