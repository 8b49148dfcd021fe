use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{log_sheet::LogSheet, trip_form::TripForm, trip_list::TripList};

mod api;
mod components;
mod geocode;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/trips")]
    Trips,
    #[at("/add-trip")]
    AddTrip,
    #[at("/logs/:trip_id")]
    Logs { trip_id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Trips => html! { <TripList /> },
        Route::AddTrip => html! { <TripForm /> },
        Route::Logs { trip_id } => html! { <LogSheet {trip_id} /> },
        Route::NotFound => html! { <h1>{"Page not found"}</h1> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
