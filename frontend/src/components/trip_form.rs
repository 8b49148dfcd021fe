use driver_logs_lib::geocode::GeocodeError;
use driver_logs_lib::trip::{Trip, TripDraft};
use gloo_console::error;
use gloo_timers::callback::Timeout;
use gloo_utils::window;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::Route;
use crate::api;
use crate::components::address_autocomplete::AddressAutocomplete;
use crate::components::nav_bar::{NavAction, NavBar};

// How long the success banner stays up before navigating back to the list.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Current,
    Pickup,
    Dropoff,
    Cycle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Editing,
    Submitting,
    Success,
}

/// Add-trip page. Validation of the cycle hours happens locally before any
/// network call; a successful submission shows a banner and then navigates
/// back to the trip list.
pub struct TripForm {
    draft: TripDraft,
    phase: Phase,
    error: Option<String>,
    locating: bool,
    redirect: Option<Timeout>,
}

pub enum Msg {
    Edit(Field, String),
    Submit,
    Submitted(Result<Trip, api::ApiError>),
    UseMyLocation,
    Located { lat: f64, lon: f64 },
    LocateFailed(String),
    CurrentLocationResolved(Result<String, GeocodeError>),
}

impl Component for TripForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: TripDraft::default(),
            phase: Phase::Editing,
            error: None,
            locating: false,
            redirect: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                match field {
                    Field::Current => self.draft.current_location = value,
                    Field::Pickup => self.draft.pickup_location = value,
                    Field::Dropoff => self.draft.dropoff_location = value,
                    Field::Cycle => self.draft.current_cycle_used = value,
                }
                true
            }
            Msg::Submit => {
                self.error = None;

                // Local check short-circuits before any network traffic.
                let payload = match self.draft.validate() {
                    Ok(payload) => payload,
                    Err(err) => {
                        self.error = Some(err.to_string());
                        return true;
                    }
                };

                self.phase = Phase::Submitting;
                let cb = ctx.link().callback(Msg::Submitted);
                spawn_local(async move {
                    cb.emit(api::create_trip(&payload).await);
                });
                true
            }
            Msg::Submitted(Ok(_trip)) => {
                self.phase = Phase::Success;
                let navigator = ctx.link().navigator();
                let timeout = Timeout::new(REDIRECT_DELAY_MS, move || {
                    if let Some(navigator) = navigator {
                        navigator.push(&Route::Home);
                    }
                });
                if let Some(prev) = self.redirect.replace(timeout) {
                    prev.cancel();
                }
                true
            }
            Msg::Submitted(Err(err)) => {
                error!(format!("Failed to add trip: {err}"));
                self.phase = Phase::Editing;
                self.error = Some(match err {
                    api::ApiError::Rejected(message) if !message.is_empty() => message,
                    _ => "Failed to add trip. Please try again.".to_owned(),
                });
                true
            }
            Msg::UseMyLocation => {
                self.locate(ctx);
                true
            }
            Msg::Located { lat, lon } => {
                let cb = ctx.link().callback(Msg::CurrentLocationResolved);
                spawn_local(async move {
                    cb.emit(crate::geocode::reverse(lat, lon).await);
                });
                false
            }
            Msg::LocateFailed(message) => {
                self.locating = false;
                self.error = Some(message);
                true
            }
            Msg::CurrentLocationResolved(Ok(address)) => {
                self.locating = false;
                self.draft.current_location = address;
                true
            }
            Msg::CurrentLocationResolved(Err(err)) => {
                error!(format!("Reverse geocoding failed: {err}"));
                self.locating = false;
                self.error = Some("Failed to get your location. Enter manually.".to_owned());
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
        let oninput_cycle = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Edit(Field::Cycle, input.value())
        });
        let edit = |field: Field| link.callback(move |value: String| Msg::Edit(field, value));

        html! {
            <>
                <NavBar action={NavAction::Home} />
                <main class="page">
                    <h1>{"Add Trip"}</h1>
                    <form {onsubmit}>
                        <div class="field-with-action">
                            <AddressAutocomplete
                                label="Current Location"
                                value={self.draft.current_location.clone()}
                                on_change={edit(Field::Current)}
                            />
                            <button
                                type="button"
                                title="Use my location"
                                disabled={self.locating}
                                onclick={link.callback(|_| Msg::UseMyLocation)}
                            >
                                { if self.locating { "…" } else { "📍" } }
                            </button>
                        </div>
                        <AddressAutocomplete
                            label="Pickup Location"
                            value={self.draft.pickup_location.clone()}
                            on_change={edit(Field::Pickup)}
                        />
                        <AddressAutocomplete
                            label="Dropoff Location"
                            value={self.draft.dropoff_location.clone()}
                            on_change={edit(Field::Dropoff)}
                        />
                        <label>
                            {"Current Cycle Used (Hours)"}
                            <input
                                type="number"
                                min="0"
                                required={true}
                                value={self.draft.current_cycle_used.clone()}
                                oninput={oninput_cycle}
                            />
                        </label>
                        if let Some(error) = &self.error {
                            <p class="alert alert-error">{error.clone()}</p>
                        }
                        if self.phase == Phase::Success {
                            <p class="alert alert-success">{"Trip added successfully!"}</p>
                        }
                        <button type="submit" disabled={self.phase != Phase::Editing}>
                            { if self.phase == Phase::Submitting { "Submitting…" } else { "Submit" } }
                        </button>
                    </form>
                </main>
            </>
        }
    }
}

impl TripForm {
    fn locate(&mut self, ctx: &Context<Self>) {
        let Ok(geolocation) = window().navigator().geolocation() else {
            self.error = Some("Geolocation is not supported in this browser.".to_owned());
            return;
        };

        self.locating = true;
        self.error = None;

        let link = ctx.link().clone();
        let on_failure = ctx.link().callback(Msg::LocateFailed);

        let success = Closure::once(move |position: web_sys::Position| {
            let coords = position.coords();
            link.send_message(Msg::Located {
                lat: coords.latitude(),
                lon: coords.longitude(),
            });
        });
        let failure = Closure::once(move |err: web_sys::PositionError| {
            error!(format!("Geolocation error: {}", err.message()));
            on_failure.emit("Location access denied. Enter manually.".to_owned());
        });

        if geolocation
            .get_current_position_with_error_callback(
                success.as_ref().unchecked_ref(),
                Some(failure.as_ref().unchecked_ref()),
            )
            .is_err()
        {
            self.locating = false;
            self.error = Some("Failed to get your location. Enter manually.".to_owned());
            return;
        }

        // The browser owns the callbacks from here on.
        success.forget();
        failure.forget();
    }
}
