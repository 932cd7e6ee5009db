use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod projects;
mod state;
mod pages {
    pub mod archive;
    pub mod home;
}

use pages::archive::Archive;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/archive")]
    Archive,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Archive => {
            info!("Rendering Archive page");
            html! { <Archive /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let base = config::base_path();
    let basename = (!base.is_empty()).then(|| base.to_string());

    html! {
        <BrowserRouter {basename}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
