use driver_logs_lib::log_entry::LogEntry;
use driver_logs_lib::trip::Trip;
use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::Fetch;
use crate::components::add_log_form::AddLogForm;
use crate::components::map_component::MapComponent;
use crate::components::nav_bar::{NavAction, NavBar};

/// Log sheet for one trip: route map, trip details, recorded log entries and
/// the add-log form. The trip fetch and the log fetch run independently; the
/// page renders as soon as the trip is there, whatever the log fetch says.
pub struct LogSheet {
    trip: Fetch<Trip>,
    logs: Fetch<Vec<LogEntry>>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub trip_id: i64,
}

pub enum Msg {
    TripLoaded(Result<Trip, api::ApiError>),
    LogsLoaded(Result<Vec<LogEntry>, api::ApiError>),
    RefreshLogs,
}

fn fetch_trip(ctx: &Context<LogSheet>) {
    let trip_id = ctx.props().trip_id;
    let cb = ctx.link().callback(Msg::TripLoaded);
    spawn_local(async move {
        cb.emit(api::get_trip(trip_id).await);
    });
}

fn fetch_logs(ctx: &Context<LogSheet>) {
    let trip_id = ctx.props().trip_id;
    let cb = ctx.link().callback(Msg::LogsLoaded);
    spawn_local(async move {
        cb.emit(api::list_logs(trip_id).await);
    });
}

impl Component for LogSheet {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        fetch_trip(ctx);
        fetch_logs(ctx);

        Self {
            trip: Fetch::Loading,
            logs: Fetch::Loading,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().trip_id != old_props.trip_id {
            self.trip = Fetch::Loading;
            self.logs = Fetch::Loading;
            fetch_trip(ctx);
            fetch_logs(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TripLoaded(result) => {
                if let Err(err) = &result {
                    error!(format!("Failed to fetch trip: {err}"));
                }
                self.trip = Fetch::from_result(result);
                true
            }
            Msg::LogsLoaded(result) => {
                if let Err(err) = &result {
                    error!(format!("Failed to fetch logs: {err}"));
                }
                self.logs = Fetch::from_result(result);
                true
            }
            Msg::RefreshLogs => {
                fetch_logs(ctx);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        // Detail fetch failure degrades to the loading line, nothing modal.
        let Fetch::Loaded(trip) = &self.trip else {
            return html! {
                <>
                    <NavBar action={NavAction::BackToTrips} />
                    <main class="page">
                        <p class="loading">{"Loading…"}</p>
                    </main>
                </>
            };
        };

        let on_created = ctx.link().callback(|()| Msg::RefreshLogs);

        html! {
            <>
                <NavBar action={NavAction::BackToTrips} />
                <main class="page log-sheet">
                    <section class="trip-details">
                        <h2>{"Trip Details"}</h2>
                        <p><strong>{"Pickup: "}</strong>{trip.pickup_location.clone()}</p>
                        <p><strong>{"Dropoff: "}</strong>{trip.dropoff_location.clone()}</p>
                        <p><strong>{"Cycle used: "}</strong>{format!("{} h", trip.current_cycle_used)}</p>
                    </section>
                    <MapComponent
                        pickup={trip.pickup_location.clone()}
                        dropoff={trip.dropoff_location.clone()}
                    />
                    <section class="logs">
                        <h2>{"Log Entries"}</h2>
                        { self.log_list() }
                        <AddLogForm trip_id={trip.id} {on_created} />
                    </section>
                </main>
            </>
        }
    }
}

impl LogSheet {
    fn log_list(&self) -> Html {
        match &self.logs {
            Fetch::Loading => html! { <p class="loading">{"Loading…"}</p> },
            Fetch::Loaded(logs) if logs.is_empty() => html! {
                <p class="empty">{"No log entries yet."}</p>
            },
            Fetch::Loaded(logs) => html! {
                <ul>
                    {
                        logs.iter().map(|log| html! {
                            <li key={log.id}>
                                {format!(
                                    "Stop: {}, Driving Hours: {}, Rest Hours: {}",
                                    log.stop_location, log.driving_hours, log.rest_hours
                                )}
                            </li>
                        }).collect::<Html>()
                    }
                </ul>
            },
            Fetch::Failed => html! { <p class="empty">{"No log entries yet."}</p> },
        }
    }
}
