use std::fmt;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::state::Msg;
use crate::structs::{Note, NoteFields, NoteId, NoteVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// The four operations of the notes service.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListNotes,
    CreateNote(NoteFields),
    UpdateNote(NoteId, NoteFields),
    DeleteNote(NoteId),
}

/// Transport-independent description of an HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<NoteFields>,
}

impl ApiCall {
    pub fn request(&self, config: &ApiConfig) -> ApiRequest {
        match self {
            ApiCall::ListNotes => ApiRequest {
                method: Method::Get,
                url: config.notes_url(),
                body: None,
            },
            ApiCall::CreateNote(fields) => ApiRequest {
                method: Method::Post,
                url: config.notes_url(),
                body: Some(fields.clone()),
            },
            ApiCall::UpdateNote(id, fields) => ApiRequest {
                method: Method::Put,
                url: config.note_url(id.as_str()),
                body: Some(fields.clone()),
            },
            ApiCall::DeleteNote(id) => ApiRequest {
                method: Method::Delete,
                url: config.note_url(id.as_str()),
                body: None,
            },
        }
    }

    /// Turns the raw outcome of the call into the message that reports it.
    pub fn complete(self, status: u16, body: anyhow::Result<String>) -> Msg {
        // A rejected fetch comes back with an unreadable body and a made-up status
        let text = match body {
            Ok(text) => text,
            Err(e) => return self.fail(ApiError::Network(e.to_string())),
        };
        let checked = check_status(status);
        match self {
            ApiCall::ListNotes => {
                Msg::NotesLoaded(checked.and_then(|_| decode::<NoteVector>(&text)))
            }
            ApiCall::CreateNote(_) | ApiCall::UpdateNote(..) => {
                Msg::Saved(checked.and_then(|_| decode::<Note>(&text)))
            }
            // The body of a successful delete is ignored
            ApiCall::DeleteNote(id) => Msg::Deleted(id, checked),
        }
    }

    /// Reports a call that never reached the server.
    pub fn fail(self, err: ApiError) -> Msg {
        match self {
            ApiCall::ListNotes => Msg::NotesLoaded(Err(err)),
            ApiCall::CreateNote(_) | ApiCall::UpdateNote(..) => Msg::Saved(Err(err)),
            ApiCall::DeleteNote(id) => Msg::Deleted(id, Err(err)),
        }
    }
}

impl fmt::Display for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiCall::ListNotes => write!(f, "list notes"),
            ApiCall::CreateNote(_) => write!(f, "create note"),
            ApiCall::UpdateNote(id, _) => write!(f, "update note {}", id),
            ApiCall::DeleteNote(id) => write!(f, "delete note {}", id),
        }
    }
}

fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(text)?)
}
