use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod content;
pub mod enhance;
pub mod components {
    pub mod cards;
    pub mod header;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}
