use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod accordion;
mod loading;
mod scroll_flag;
mod scroll_lock;
mod components {
    pub mod drawer;
    pub mod fade_in;
    pub mod footer;
    pub mod loading_screen;
    pub mod logo;
    pub mod nav;
    pub mod section;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod transformation;
}

use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            // Legal and company pages are static files; anything else
            // that reaches the app goes back to the top.
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
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
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
