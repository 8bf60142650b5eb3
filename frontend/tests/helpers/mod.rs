#![allow(dead_code)]

use anyhow::anyhow;
use notes_frontend::api::{ApiRequest, Method};
use notes_frontend::config::ApiConfig;
use notes_frontend::state::{Effect, Msg, State};
use notes_frontend::structs::{Note, NoteId, NoteVector};
use serde_json::json;

pub const BASE_URL: &str = "http://notes.test";

/// In-memory stand-in for the notes REST service.
pub struct FakeNotesService {
    notes: NoteVector,
    next_id: u32,
    offline: bool,
    failing_status: Option<u16>,
}

impl FakeNotesService {
    pub fn new() -> Self {
        Self { notes: NoteVector::new(), next_id: 1, offline: false, failing_status: None }
    }

    pub fn with_note(mut self, id: &str, title: &str, content: &str) -> Self {
        self.notes.push(Note {
            id: NoteId::new(id),
            title: title.into(),
            content: content.into(),
            created_at: Some(json!("2024-01-01T00:00:00.000Z")),
        });
        self
    }

    pub fn go_offline(&mut self) {
        self.offline = true;
    }

    pub fn fail_with(&mut self, status: u16) {
        self.failing_status = Some(status);
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn handle(&mut self, request: &ApiRequest) -> (u16, anyhow::Result<String>) {
        if self.offline {
            // Yew reports a rejected fetch as 408 with no readable body
            return (408, Err(anyhow!("TypeError: Failed to fetch")));
        }
        if let Some(status) = self.failing_status {
            return (status, Ok(String::new()));
        }

        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url).to_string();
        let id = path.strip_prefix("/notes/").map(NoteId::new);

        match (request.method, id) {
            (Method::Get, None) => ok(&self.notes),
            (Method::Post, None) => {
                let fields = request.body.clone().expect("create carries a body");
                let note = Note {
                    id: NoteId::new(format!("id-{}", self.next_id)),
                    title: fields.title,
                    content: fields.content,
                    created_at: Some(json!("2024-01-02T00:00:00.000Z")),
                };
                self.next_id += 1;
                self.notes.push(note.clone());
                (201, Ok(serde_json::to_string(&note).expect("note encodes")))
            }
            (Method::Put, Some(id)) => {
                let fields = request.body.clone().expect("update carries a body");
                match self.notes.iter_mut().find(|note| note.id == id) {
                    Some(note) => {
                        note.title = fields.title;
                        note.content = fields.content;
                        let note = note.clone();
                        ok(&note)
                    }
                    None => (404, Ok(String::new())),
                }
            }
            (Method::Delete, Some(id)) => {
                let before = self.notes.len();
                self.notes.retain(|note| note.id != id);
                if self.notes.len() < before {
                    (200, Ok(String::new()))
                } else {
                    (404, Ok(String::new()))
                }
            }
            _ => (405, Ok(String::new())),
        }
    }
}

fn ok<T: serde::Serialize>(value: &T) -> (u16, anyhow::Result<String>) {
    (200, Ok(serde_json::to_string(value).expect("value encodes")))
}

/// Plays the component's part: runs effects against the fake service and
/// records every request that went out.
pub struct Harness {
    pub service: FakeNotesService,
    pub config: ApiConfig,
    pub requests: Vec<ApiRequest>,
    pub confirm_deletes: bool,
    pub state: State,
}

impl Harness {
    pub fn new(service: FakeNotesService) -> Self {
        Self {
            service,
            config: ApiConfig::new(BASE_URL),
            requests: Vec::new(),
            confirm_deletes: true,
            state: State::new(),
        }
    }

    /// A harness whose initial list fetch already happened.
    pub fn mounted(service: FakeNotesService) -> Self {
        let mut harness = Self::new(service);
        harness.send(Msg::Refresh);
        harness.requests.clear();
        harness
    }

    pub fn send(&mut self, msg: Msg) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            let (state, effect) = std::mem::take(&mut self.state).update(msg);
            self.state = state;
            next = match effect {
                None => None,
                Some(Effect::ConfirmDelete(id)) if self.confirm_deletes => Some(Msg::Delete(id)),
                Some(Effect::ConfirmDelete(_)) => None,
                Some(Effect::Call(call)) => {
                    let request = call.request(&self.config);
                    let (status, body) = self.service.handle(&request);
                    self.requests.push(request);
                    Some(call.complete(status, body))
                }
            };
        }
    }

    pub fn type_draft(&mut self, title: &str, content: &str) {
        self.send(Msg::TitleChanged(title.into()));
        self.send(Msg::ContentChanged(content.into()));
    }

    pub fn methods(&self) -> Vec<Method> {
        self.requests.iter().map(|request| request.method).collect()
    }
}
