use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::COMPANY;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="button">
                {format!("Back to {}", COMPANY)}
            </Link<Route>>
        </div>
    }
}
