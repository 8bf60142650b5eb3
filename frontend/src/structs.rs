use std::fmt;

use serde::{Serialize, Deserialize};

/// Server-assigned note identifier, never generated on this side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        NoteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Note {
    #[serde(rename = "_id", alias = "id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    // Opaque to the client, kept only so a note survives a round trip intact
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<serde_json::Value>,
}

/// The only fields the client ever sends.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
}

impl From<&Note> for NoteFields {
    fn from(note: &Note) -> Self {
        NoteFields {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

pub type NoteVector = Vec<Note>;
