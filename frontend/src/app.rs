use log::debug;
use yew::format::{Json, Nothing, Text};
use yew::prelude::*;
use yew::services::fetch::{FetchService, FetchTask, Request, Response};
use yew::services::DialogService;

use crate::api::{ApiCall, ApiRequest};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::state::{Effect, Msg, State, Status};
use crate::structs::Note;

const CONFIRM_DELETE: &str = "Are you sure you want to delete this note?";
const EMPTY_LIST: &str = "No notes found. Add a new note to get started!";

pub struct NoteManager {
    link: ComponentLink<Self>,
    ft: Option<FetchTask>,
    config: ApiConfig,
    state: State,
}

impl Component for NoteManager {
    type Message = Msg;
    type Properties = ();

    fn create(_props: Self::Properties, link: ComponentLink<Self>) -> Self {
        let mut manager = Self {
            link,
            ft: None,
            config: ApiConfig::from_build_env(),
            state: State::new(),
        };
        debug!("Notes service at {}", manager.config.base_url());

        manager.dispatch(Msg::Refresh);
        manager
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        self.dispatch(msg);
        true
    }

    fn change(&mut self, _props: Self::Properties) -> ShouldRender {
        false
    }

    fn view(&self) -> Html {
        html! {
            <div class="container">
                <h1>{ "Notes" }</h1>
                <div class="submitArea">{ self.view_form() }</div>
                { self.view_status() }
                <div class="listHeader">
                    <h2>{ "Notes List" }</h2>
                    <button
                        disabled=self.state.is_busy()
                        onclick=self.link.callback(|_| Msg::Refresh)>
                        { "Reload" }
                    </button>
                </div>
                <div class="mainContent">{ self.view_notes() }</div>
            </div>
        }
    }
}

impl NoteManager {
    /// Feeds a message through the reducer and carries out whatever it asks
    /// for, until no further message results.
    fn dispatch(&mut self, msg: Msg) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            let (state, effect) = std::mem::take(&mut self.state).update(msg);
            self.state = state;

            next = match effect {
                None => None,
                Some(Effect::ConfirmDelete(id)) => {
                    if DialogService::confirm(CONFIRM_DELETE) {
                        Some(Msg::Delete(id))
                    } else {
                        None
                    }
                }
                Some(Effect::Call(call)) => match self.start(call.clone()) {
                    Ok(task) => {
                        self.ft = Some(task);
                        None
                    }
                    Err(err) => Some(call.fail(err)),
                },
            };
        }
    }

    fn start(&self, call: ApiCall) -> Result<FetchTask, ApiError> {
        let ApiRequest { method, url, body } = call.request(&self.config);
        debug!("{}: {} {}", call, method.as_str(), url);

        let callback = self.link.callback(move |response: Response<Text>| {
            let (meta, body) = response.into_parts();
            call.clone().complete(meta.status.as_u16(), body)
        });

        let builder = Request::builder().method(method.as_str()).uri(url.as_str());
        match body {
            Some(fields) => {
                let request = builder
                    .header("Content-Type", "application/json")
                    .body(Json(&fields))
                    .map_err(|e| ApiError::Request(e.to_string()))?;
                fetch(request, callback)
            }
            None => {
                let request = builder
                    .body(Nothing)
                    .map_err(|e| ApiError::Request(e.to_string()))?;
                fetch(request, callback)
            }
        }
    }

    fn view_form(&self) -> Html {
        let draft = self.state.draft();
        let (label, cancel) = if draft.is_editing() {
            let cancel = html! {
                <button onclick=self.link.callback(|_| Msg::CancelEdit)>{ "Cancel" }</button>
            };
            ("Update Note", cancel)
        } else {
            ("Add Note", html! {})
        };

        html! {
            <div class="innerSubmitArea">
                <label>{ "Title:" }</label>
                <input type="text"
                    value=draft.title().to_string()
                    oninput=self.link.callback(|e: InputData| Msg::TitleChanged(e.value))
                    placeholder="Title" />
                <label>{ "Content:" }</label>
                <textarea rows=5
                    value=draft.content().to_string()
                    oninput=self.link.callback(|e: InputData| Msg::ContentChanged(e.value))
                    placeholder="Content">
                </textarea>
                <div class="submitButton">
                    <button
                        disabled=self.state.is_busy()
                        onclick=self.link.callback(|_| Msg::Submit)>
                        { label }
                    </button>
                    { cancel }
                </div>
            </div>
        }
    }

    fn view_status(&self) -> Html {
        let (class, text) = match self.state.status() {
            None => return html! {},
            Some(Status::Info(text)) => ("result", text),
            Some(Status::Error(text)) => ("result error", text),
        };

        html! {
            <div class=class>
                <span>{ text }</span>
                <button onclick=self.link.callback(|_| Msg::DismissStatus)>{ "Dismiss" }</button>
            </div>
        }
    }

    fn view_notes(&self) -> Html {
        if self.state.is_loading() {
            return html! { <p class="loading">{ "Loading..." }</p> };
        }
        if self.state.notes().is_empty() {
            return html! { <p class="emptyState">{ EMPTY_LIST }</p> };
        }

        let notes = self.state.notes().iter().map(|note| self.view_note(note));
        html! {
            <ul class="notesList">
                { for notes }
            </ul>
        }
    }

    fn view_note(&self, note: &Note) -> Html {
        let edit_id = note.id.clone();
        let delete_id = note.id.clone();

        html! {
            <li class="note" key=note.id.to_string()>
                <div class="noteTitle">
                    <b>{ &note.title }</b>
                </div>
                <div class="noteContent">
                    { &note.content }
                </div>
                <div class="noteButtons">
                    <button onclick=self.link.callback(move |_| Msg::Edit(edit_id.clone()))>
                        { "Edit" }
                    </button>
                    <button onclick=self.link.callback(move |_| Msg::RequestDelete(delete_id.clone()))>
                        { "Delete" }
                    </button>
                </div>
            </li>
        }
    }
}

fn fetch<B: Into<Text>>(
    request: Request<B>,
    callback: Callback<Response<Text>>,
) -> Result<FetchTask, ApiError> {
    FetchService::fetch(request, callback).map_err(|e| ApiError::Network(e.to_string()))
}
