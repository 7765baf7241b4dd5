use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a clipboard on insert.
pub type ClipboardId = i64;

/// Identifier assigned to an item on insert.
pub type ItemId = i64;

const SHARED_KEY: &str = "shared";
const USER_PREFIX: &str = "user:";

/// The identity that owns a clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Owner of the demo seed data. Its clipboards can be made visible to everyone.
    Shared,
    /// An authenticated caller, identified by the token subject.
    User(String),
}

impl Owner {
    /// Creates a user owner from a token subject.
    pub fn user(subject: impl Into<String>) -> Self {
        Owner::User(subject.into())
    }

    /// Returns true for the shared demo owner.
    pub fn is_shared(&self) -> bool {
        matches!(self, Owner::Shared)
    }

    /// Returns the stable string form used in storage columns and cache keys.
    ///
    /// ```
    /// use todoboard_core::board::Owner;
    ///
    /// assert_eq!(Owner::Shared.as_key(), "shared");
    /// assert_eq!(Owner::user("abc").as_key(), "user:abc");
    /// ```
    pub fn as_key(&self) -> String {
        match self {
            Owner::Shared => SHARED_KEY.to_string(),
            Owner::User(subject) => format!("{USER_PREFIX}{subject}"),
        }
    }

    /// Parses the output of [`Owner::as_key`].
    pub fn from_key(key: &str) -> Option<Self> {
        if key == SHARED_KEY {
            return Some(Owner::Shared);
        }
        key.strip_prefix(USER_PREFIX)
            .filter(|subject| !subject.is_empty())
            .map(Owner::user)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

/// A named group of items belonging to one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    pub id: ClipboardId,
    pub name: String,
    pub owner: Owner,
}

impl Clipboard {
    pub fn new(id: ClipboardId, name: impl Into<String>, owner: Owner) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
        }
    }

    /// Returns true when `owner` may modify this clipboard or its items.
    pub fn is_owned_by(&self, owner: &Owner) -> bool {
        &self.owner == owner
    }

    /// Returns true when `owner` may read this clipboard's items.
    ///
    /// Shared clipboards are readable by everyone when `share_demo_data` is set.
    pub fn is_visible_to(&self, owner: &Owner, share_demo_data: bool) -> bool {
        self.is_owned_by(owner) || (share_demo_data && self.owner.is_shared())
    }
}

/// Wire form of a clipboard. The owner never leaves the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardSummary {
    pub id: ClipboardId,
    pub name: String,
}

impl From<&Clipboard> for ClipboardSummary {
    fn from(clipboard: &Clipboard) -> Self {
        Self {
            id: clipboard.id,
            name: clipboard.name.clone(),
        }
    }
}

impl From<Clipboard> for ClipboardSummary {
    fn from(clipboard: Clipboard) -> Self {
        Self {
            id: clipboard.id,
            name: clipboard.name,
        }
    }
}

/// A todo item inside a clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub clipboard_id: ClipboardId,
    pub name: String,
    pub is_complete: bool,
}

impl Item {
    /// Creates an unfinished item.
    pub fn new(id: ItemId, clipboard_id: ClipboardId, name: impl Into<String>) -> Self {
        Self {
            id,
            clipboard_id,
            name: name.into(),
            is_complete: false,
        }
    }

    /// Sets the completion flag.
    pub fn with_complete(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }
}
