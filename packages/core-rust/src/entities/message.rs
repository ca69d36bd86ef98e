//! Message records for the messaging hub.
//!
//! Direct, group, and channel messages share one record shape. The channel
//! variant adds community fields (`channel`, `upvotes`, `is_pinned`,
//! `is_admin`) consumed by the ranked-channel view.

use serde::{Deserialize, Serialize};

/// Delivery variant of a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// One-to-one message addressed to `recipient_id`. The default.
    #[default]
    Direct,
    /// Message inside a named study group.
    Group,
    /// Post in a public channel, eligible for pinning and upvotes.
    Channel,
}

/// A message in the portal messaging hub.
///
/// `sender_id` and `recipient_id` are not validated against the user
/// collection; dangling references are tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identity, assigned at creation.
    pub id: String,
    /// Identity of the sending user.
    pub sender_id: String,
    /// Identity of the recipient for direct messages.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recipient_id: Option<String>,
    /// Group display name for group messages.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub group_name: Option<String>,
    /// Message body.
    pub content: String,
    /// Delivery variant.
    #[serde(rename = "type")]
    pub kind: MessageType,
    /// Channel name for channel posts.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub channel: Option<String>,
    /// Upvote count for channel posts.
    pub upvotes: u32,
    /// Whether the sender is a channel admin.
    pub is_admin: bool,
    /// Whether the post is pinned to the top of its channel.
    pub is_pinned: bool,
    /// Whether the recipient has read the message.
    pub is_read: bool,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<i64>,
}

/// Create input for [`Message`].
///
/// Defaults applied by the store: `type` → direct, `upvotes` → 0,
/// `is_admin`/`is_pinned`/`is_read` → false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    /// Identity of the sending user. Not checked for existence.
    pub sender_id: String,
    /// Identity of the recipient for direct messages.
    #[serde(default)]
    pub recipient_id: Option<String>,
    /// Group display name for group messages.
    #[serde(default)]
    pub group_name: Option<String>,
    /// Message body.
    pub content: String,
    /// Delivery variant; the store defaults this to direct.
    #[serde(rename = "type", default)]
    pub kind: Option<MessageType>,
    /// Channel name for channel posts.
    #[serde(default)]
    pub channel: Option<String>,
    /// Initial upvote count; the store defaults this to 0.
    #[serde(default)]
    pub upvotes: Option<u32>,
    /// Whether the sender is a channel admin.
    #[serde(default)]
    pub is_admin: Option<bool>,
    /// Whether the post starts pinned.
    #[serde(default)]
    pub is_pinned: Option<bool>,
    /// Whether the message starts read.
    #[serde(default)]
    pub is_read: Option<bool>,
}

/// Partial update for [`Message`].
///
/// Only community state is update-eligible; addressing and content are
/// immutable after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePatch {
    /// New upvote count.
    #[serde(default)]
    pub upvotes: Option<u32>,
    /// New pinned state.
    #[serde(default)]
    pub is_pinned: Option<bool>,
    /// New read state.
    #[serde(default)]
    pub is_read: Option<bool>,
}

impl MessagePatch {
    /// Merges this patch onto `message`, overwriting exactly the fields
    /// that are `Some` and retaining everything else.
    pub fn apply_to(&self, message: &mut Message) {
        if let Some(upvotes) = self.upvotes {
            message.upvotes = upvotes;
        }
        if let Some(pinned) = self.is_pinned {
            message.is_pinned = pinned;
        }
        if let Some(read) = self.is_read {
            message.is_read = read;
        }
    }
}
