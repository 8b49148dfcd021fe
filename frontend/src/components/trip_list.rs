use driver_logs_lib::trip::Trip;
use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::scope_ext::RouterScopeExt;

use crate::Route;
use crate::api;
use crate::components::Fetch;
use crate::components::nav_bar::NavBar;

/// Trip overview page. Deleting goes through a confirmation dialog; on
/// confirmation exactly one DELETE is issued and the entry is dropped from
/// the local list without a re-fetch.
pub struct TripList {
    trips: Fetch<Vec<Trip>>,
    confirm_delete: Option<i64>,
}

pub enum Msg {
    TripsLoaded(Result<Vec<Trip>, api::ApiError>),
    Open(i64),
    AskDelete(i64),
    CancelDelete,
    ConfirmDelete,
    Deleted(i64, Result<(), api::ApiError>),
}

impl Component for TripList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let cb = ctx.link().callback(Msg::TripsLoaded);
        spawn_local(async move {
            cb.emit(api::list_trips().await);
        });

        Self {
            trips: Fetch::Loading,
            confirm_delete: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TripsLoaded(result) => {
                if let Err(err) = &result {
                    error!(format!("Failed to fetch trips: {err}"));
                }
                self.trips = Fetch::from_result(result);
                true
            }
            Msg::Open(id) => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Logs { trip_id: id });
                }
                false
            }
            Msg::AskDelete(id) => {
                self.confirm_delete = Some(id);
                true
            }
            Msg::CancelDelete => {
                self.confirm_delete = None;
                true
            }
            Msg::ConfirmDelete => {
                let Some(id) = self.confirm_delete.take() else {
                    return false;
                };
                let cb = ctx.link().callback(move |result| Msg::Deleted(id, result));
                spawn_local(async move {
                    cb.emit(api::delete_trip(id).await);
                });
                true
            }
            Msg::Deleted(id, result) => match result {
                Ok(()) => {
                    if let Fetch::Loaded(trips) = &mut self.trips {
                        trips.retain(|trip| trip.id != id);
                    }
                    true
                }
                Err(err) => {
                    error!(format!("Failed to delete trip {id}: {err}"));
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <>
                <NavBar />
                <main class="page">
                    <h1>{"Trips"}</h1>
                    <Link<Route> classes="button" to={Route::AddTrip}>{"Add New Trip"}</Link<Route>>
                    {
                        match &self.trips {
                            Fetch::Loading => html! { <p class="loading">{"Loading…"}</p> },
                            Fetch::Loaded(trips) if trips.is_empty() => html! {
                                <p class="empty">{"No trips yet."}</p>
                            },
                            Fetch::Loaded(trips) => html! {
                                <ul class="trip-list">
                                    {trips.iter().map(|trip| self.trip_row(ctx, trip)).collect::<Html>()}
                                </ul>
                            },
                            // Fetch failure degrades to the empty state; the
                            // diagnostic already went to the console.
                            Fetch::Failed => html! { <p class="empty">{"No trips yet."}</p> },
                        }
                    }
                    if self.confirm_delete.is_some() {
                        <div class="dialog">
                            <h2>{"Delete Trip"}</h2>
                            <p>{"Are you sure you want to delete this trip?"}</p>
                            <button onclick={link.callback(|_| Msg::CancelDelete)}>{"Cancel"}</button>
                            <button class="danger" onclick={link.callback(|_| Msg::ConfirmDelete)}>{"Delete"}</button>
                        </div>
                    }
                </main>
            </>
        }
    }
}

impl TripList {
    fn trip_row(&self, ctx: &Context<Self>, trip: &Trip) -> Html {
        let id = trip.id;
        let open = ctx.link().callback(move |_| Msg::Open(id));
        let ask_delete = ctx.link().callback(move |e: MouseEvent| {
            e.stop_propagation();
            Msg::AskDelete(id)
        });

        html! {
            <li class="trip-row" key={id} onclick={open}>
                <span>{format!("{} → {}", trip.pickup_location, trip.dropoff_location)}</span>
                <button class="danger" onclick={ask_delete}>{"🗑"}</button>
            </li>
        }
    }
}
