//! # User records and drafts
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A record as returned by the backend listing endpoint. `profile_picture` is a hosted image URL. |
//! | [`UserDraft`] | The unsaved record edited on the creation screen. `profile_picture` is either a generated avatar URL or a local file reference from the camera. |
//! | [`DraftField`] | Names one of the four draft fields, used to report what is missing. |
//!
//! The wire format follows the backend: camelCase keys, and the identifier may
//! arrive as `id`, as `_id`, or as both (`id` wins). A `null` photo reads as empty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user record owned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserRecord")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Usually absent when reading back from the listing endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub profile_picture: String,
}

/// Wire shape of a user. Backends may send `_id`, `id` or both, and a null photo.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    name: String,
    email: String,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
}

impl TryFrom<UserRecord> for User {
    type Error = String;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .or(record.object_id)
            .ok_or_else(|| format!("user record for {} has no id", record.email))?;
        Ok(User {
            id,
            name: record.name,
            email: record.email,
            password: record.password,
            profile_picture: record.profile_picture.unwrap_or_default(),
        })
    }
}

impl User {
    /// The `"<name> - <email>"` line used when sharing the list.
    pub fn export_line(&self) -> String {
        format!("{} - {}", self.name, self.email)
    }
}

/// The four fields of a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Password,
    ProfilePicture,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Email,
        DraftField::Password,
        DraftField::ProfilePicture,
    ];

    /// Multipart field name expected by the creation endpoint.
    pub fn wire_name(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Password => "password",
            DraftField::ProfilePicture => "profilePicture",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Password => "password",
            DraftField::ProfilePicture => "photo",
        };
        f.write_str(label)
    }
}

/// An unsaved user record. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Avatar URL, `file://` URI or plain path. Empty when cleared.
    pub profile_picture: String,
}

impl UserDraft {
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::Password => &self.password,
            DraftField::ProfilePicture => &self.profile_picture,
        }
    }

    /// Fields that are still the empty string, in declaration order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn has_photo(&self) -> bool {
        !self.profile_picture.is_empty()
    }
}
