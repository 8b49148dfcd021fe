use driver_logs_lib::log_entry::{LogDraft, LogEntry};
use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;

/// Inline form for recording a log entry against a trip. On success the
/// fields reset and `on_created` tells the log sheet to re-fetch its list.
pub struct AddLogForm {
    draft: LogDraft,
    submitting: bool,
    error: Option<String>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub trip_id: i64,
    pub on_created: Callback<()>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Stop,
    Driving,
    Rest,
}

pub enum Msg {
    Edit(Field, String),
    Submit,
    Submitted(Result<LogEntry, api::ApiError>),
}

impl Component for AddLogForm {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: LogDraft::default(),
            submitting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                match field {
                    Field::Stop => self.draft.stop_location = value,
                    Field::Driving => self.draft.driving_hours = value,
                    Field::Rest => self.draft.rest_hours = value,
                }
                true
            }
            Msg::Submit => {
                if !self.draft.is_complete() {
                    self.error = Some("All fields are required.".to_owned());
                    return true;
                }
                self.submitting = true;
                self.error = None;

                let trip_id = ctx.props().trip_id;
                let payload = self.draft.clone().into_payload(trip_id);
                let cb = ctx.link().callback(Msg::Submitted);
                spawn_local(async move {
                    cb.emit(api::create_log(trip_id, &payload).await);
                });
                true
            }
            Msg::Submitted(Ok(_entry)) => {
                self.submitting = false;
                self.draft = LogDraft::default();
                ctx.props().on_created.emit(());
                true
            }
            Msg::Submitted(Err(err)) => {
                error!(format!("Failed to add log: {err}"));
                self.submitting = false;
                self.error = Some("Failed to add log entry. Please try again.".to_owned());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let edit = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Edit(field, input.value())
            })
        };

        html! {
            <form class="add-log" {onsubmit}>
                <h3>{"Add Log Entry"}</h3>
                <label>
                    {"Stop Location"}
                    <input
                        type="text"
                        required={true}
                        value={self.draft.stop_location.clone()}
                        oninput={edit(Field::Stop)}
                    />
                </label>
                <label>
                    {"Driving Hours"}
                    <input
                        type="number"
                        required={true}
                        value={self.draft.driving_hours.clone()}
                        oninput={edit(Field::Driving)}
                    />
                </label>
                <label>
                    {"Rest Hours"}
                    <input
                        type="number"
                        required={true}
                        value={self.draft.rest_hours.clone()}
                        oninput={edit(Field::Rest)}
                    />
                </label>
                if let Some(error) = &self.error {
                    <p class="alert alert-error">{error.clone()}</p>
                }
                <button type="submit" disabled={self.submitting}>{"Add Log"}</button>
            </form>
        }
    }
}
