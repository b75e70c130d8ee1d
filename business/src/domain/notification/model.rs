use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Order,
    Promotion,
    System,
    #[strum(default)]
    Other(String),
}

/// Inbox entry. `read` is the only field the client ever mutates, and it
/// is already normalized from the backend's legacy encodings by the time
/// a value of this type exists (see `read_state`).
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub additional_data: Option<serde_json::Value>,
}
