use driver_logs_lib::suggest::{DEBOUNCE_MS, Plan, SuggestionFlow};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::geocode;

/// Free-text address input with debounced suggestions from the geocoder.
/// The displayed value is owned by the parent (controlled input); this
/// component only reports edits through `on_change`.
pub struct AddressAutocomplete {
    flow: SuggestionFlow,
    debounce: Option<Timeout>,
    suggestions: Vec<String>,
    loading: bool,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

pub enum Msg {
    Input(String),
    FetchDue { query: String, seq: u64 },
    Loaded { seq: u64, results: Vec<String> },
    Pick(String),
}

impl AddressAutocomplete {
    fn cancel_pending(&mut self) {
        if let Some(pending) = self.debounce.take() {
            pending.cancel();
        }
    }
}

impl Component for AddressAutocomplete {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: SuggestionFlow::new(),
            debounce: None,
            suggestions: Vec::new(),
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(value) => {
                ctx.props().on_change.emit(value.clone());
                match self.flow.on_input(&value) {
                    Plan::Clear => {
                        self.cancel_pending();
                        self.suggestions.clear();
                        self.loading = false;
                    }
                    Plan::Schedule { query, seq } => {
                        let link = ctx.link().clone();
                        let timeout = Timeout::new(DEBOUNCE_MS, move || {
                            link.send_message(Msg::FetchDue { query, seq });
                        });
                        // Rescheduling cancels the superseded timer.
                        if let Some(prev) = self.debounce.replace(timeout) {
                            prev.cancel();
                        }
                    }
                }
                true
            }
            Msg::FetchDue { query, seq } => {
                if !self.flow.is_current(seq) {
                    return false;
                }
                self.loading = true;
                let cb = ctx
                    .link()
                    .callback(move |results| Msg::Loaded { seq, results });
                spawn_local(async move {
                    // Fetch failure means no suggestions, nothing surfaced.
                    let results = geocode::suggestions(&query).await.unwrap_or_default();
                    cb.emit(results);
                });
                true
            }
            Msg::Loaded { seq, results } => {
                if !self.flow.is_current(seq) {
                    return false;
                }
                self.loading = false;
                self.suggestions = results;
                true
            }
            Msg::Pick(suggestion) => {
                self.flow.select();
                self.cancel_pending();
                self.suggestions.clear();
                self.loading = false;
                ctx.props().on_change.emit(suggestion);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Input(input.value())
        });

        html! {
            <div class="autocomplete">
                <label>
                    {ctx.props().label.clone()}
                    <input
                        type="text"
                        required={true}
                        value={ctx.props().value.clone()}
                        {oninput}
                    />
                </label>
                if self.loading {
                    <span class="autocomplete-loading">{"…"}</span>
                }
                if !self.suggestions.is_empty() {
                    <ul class="autocomplete-suggestions">
                        {
                            self.suggestions.iter().map(|suggestion| {
                                let pick = {
                                    let suggestion = suggestion.clone();
                                    link.callback(move |_| Msg::Pick(suggestion.clone()))
                                };
                                html! {
                                    <li onclick={pick}>{suggestion.clone()}</li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>
                }
            </div>
        }
    }
}
