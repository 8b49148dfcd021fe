use yew::prelude::*;
use yew_router::prelude::Link;

use crate::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    Home,
    BackToTrips,
}

#[derive(PartialEq, Properties)]
pub struct NavBarProps {
    #[prop_or_default]
    pub action: Option<NavAction>,
}

#[function_component]
pub fn NavBar(props: &NavBarProps) -> Html {
    html! {
        <header class="nav-bar">
            <span class="nav-brand">{"🚚 Driver Logs"}</span>
            {
                match &props.action {
                    Some(NavAction::Home) => html! {
                        <Link<Route> classes="nav-link" to={Route::Home}>{"Home"}</Link<Route>>
                    },
                    Some(NavAction::BackToTrips) => html! {
                        <Link<Route> classes="nav-link" to={Route::Trips}>{"Back to Trips"}</Link<Route>>
                    },
                    None => html! {},
                }
            }
        </header>
    }
}
