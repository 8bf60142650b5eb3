//! Everything the note manager remembers between renders, and the single
//! function allowed to change it.
//!
//! `State::update` consumes the current state together with a `Msg` and
//! hands back the next state plus, at most, one `Effect` for the component
//! to carry out. Nothing in here touches the network or the DOM.

use log::{debug, error, info, warn};

use crate::api::ApiCall;
use crate::error::ApiError;
use crate::structs::{Note, NoteFields, NoteId, NoteVector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftMode {
    Creating,
    Editing(NoteId),
}

impl Default for DraftMode {
    fn default() -> Self {
        DraftMode::Creating
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    fields: NoteFields,
    mode: DraftMode,
}

impl Draft {
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn content(&self) -> &str {
        &self.fields.content
    }

    pub fn fields(&self) -> &NoteFields {
        &self.fields
    }

    pub fn mode(&self) -> &DraftMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Editing(_))
    }

    fn is_complete(&self) -> bool {
        !self.fields.title.trim().is_empty() && !self.fields.content.trim().is_empty()
    }
}

/// The request currently in flight. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    Loading,
    /// Carries the mode the draft had when it was submitted.
    Saving(DraftMode),
    Deleting(NoteId),
}

/// Feedback shown to the user about the last thing that happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Refresh,
    NotesLoaded(Result<NoteVector, ApiError>),

    TitleChanged(String),
    ContentChanged(String),

    Submit,
    Saved(Result<Note, ApiError>),
    Edit(NoteId),
    CancelEdit,

    RequestDelete(NoteId),
    Delete(NoteId),
    Deleted(NoteId, Result<(), ApiError>),

    DismissStatus,
}

/// Work the component has to perform on behalf of the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Call(ApiCall),
    ConfirmDelete(NoteId),
}

const BUSY_MESSAGE: &str = "Please wait for the current request to finish.";
const REQUIRED_MESSAGE: &str = "Title and content are required.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    notes: NoteVector,
    draft: Draft,
    pending: Option<Pending>,
    status: Option<Status>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending == Some(Pending::Loading)
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn update(mut self, msg: Msg) -> (State, Option<Effect>) {
        debug!("update: {:?}", msg);
        let effect = match msg {
            Msg::Refresh => {
                if self.is_busy() {
                    debug!("Refresh skipped, request already pending");
                    None
                } else {
                    self.call(Pending::Loading, ApiCall::ListNotes)
                }
            }
            Msg::NotesLoaded(Ok(notes)) => {
                self.pending = None;
                self.notes = notes;
                None
            }
            Msg::NotesLoaded(Err(err)) => {
                // Previous list stays on screen
                self.pending = None;
                self.fail("Error fetching notes", &err);
                None
            }

            Msg::TitleChanged(title) => {
                self.draft.fields.title = title;
                None
            }
            Msg::ContentChanged(content) => {
                self.draft.fields.content = content;
                None
            }

            Msg::Submit => {
                if self.is_busy() {
                    self.refuse();
                    None
                } else if !self.draft.is_complete() {
                    self.status = Some(Status::Error(REQUIRED_MESSAGE.to_string()));
                    None
                } else {
                    let fields = self.draft.fields.clone();
                    let call = match &self.draft.mode {
                        DraftMode::Creating => ApiCall::CreateNote(fields),
                        DraftMode::Editing(id) => ApiCall::UpdateNote(id.clone(), fields),
                    };
                    let submitted = self.draft.mode.clone();
                    self.status = None;
                    self.call(Pending::Saving(submitted), call)
                }
            }
            Msg::Saved(Ok(note)) => {
                let submitted = match self.pending.take() {
                    Some(Pending::Saving(mode)) => mode,
                    _ => self.draft.mode.clone(),
                };
                let message = match submitted {
                    DraftMode::Creating => "Note added",
                    DraftMode::Editing(_) => "Note updated",
                };
                info!("{}: {}", message, note.id);
                // A draft switched by Edit or Cancel during the save is left alone
                if self.draft.mode == submitted {
                    self.draft = Draft::default();
                }
                self.status = Some(Status::Info(message.to_string()));
                self.call(Pending::Loading, ApiCall::ListNotes)
            }
            Msg::Saved(Err(err)) => {
                // Draft is kept so the user can try again
                self.pending = None;
                self.fail("Error saving note", &err);
                None
            }
            Msg::Edit(id) => {
                match self.notes.iter().find(|note| note.id == id) {
                    Some(note) => {
                        self.draft = Draft {
                            fields: NoteFields::from(note),
                            mode: DraftMode::Editing(id),
                        };
                    }
                    None => debug!("Edit ignored, note {} is not listed", id),
                }
                None
            }
            Msg::CancelEdit => {
                self.draft = Draft::default();
                None
            }

            Msg::RequestDelete(id) => {
                if self.is_busy() {
                    self.refuse();
                    None
                } else {
                    Some(Effect::ConfirmDelete(id))
                }
            }
            Msg::Delete(id) => {
                if self.is_busy() {
                    self.refuse();
                    None
                } else {
                    self.status = None;
                    self.call(Pending::Deleting(id.clone()), ApiCall::DeleteNote(id))
                }
            }
            Msg::Deleted(id, Ok(())) => {
                info!("Note deleted: {}", id);
                if self.draft.mode == DraftMode::Editing(id) {
                    self.draft = Draft::default();
                }
                self.status = Some(Status::Info("Note deleted".to_string()));
                self.call(Pending::Loading, ApiCall::ListNotes)
            }
            Msg::Deleted(_, Err(err)) => {
                self.pending = None;
                self.fail("Error deleting note", &err);
                None
            }

            Msg::DismissStatus => {
                self.status = None;
                None
            }
        };
        (self, effect)
    }

    fn call(&mut self, pending: Pending, call: ApiCall) -> Option<Effect> {
        self.pending = Some(pending);
        Some(Effect::Call(call))
    }

    fn fail(&mut self, context: &str, err: &ApiError) {
        error!("{}: {}", context, err);
        self.status = Some(Status::Error(format!("{}: {}", context, err)));
    }

    fn refuse(&mut self) {
        warn!("Action refused, request already pending: {:?}", self.pending);
        self.status = Some(Status::Info(BUSY_MESSAGE.to_string()));
    }
}
