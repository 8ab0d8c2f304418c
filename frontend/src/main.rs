use log::{error, info};
use web_sys::{ErrorEvent, PromiseRejectionEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod dom;
mod scroll_spy;
mod content {
    pub mod about;
    pub mod contact;
    pub mod gallery;
    pub mod services;
    pub mod testimonials;
}
mod components {
    pub mod contact;
    pub mod founders;
    pub mod hero;
    pub mod lightbox;
    pub mod media;
    pub mod navbar;
    pub mod portfolio;
    pub mod scroll_progress;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

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
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Swallow stray promise rejections so they never surface as uncaught
    use_event_with_window("unhandledrejection", |e: PromiseRejectionEvent| {
        e.prevent_default();
        if config::diagnostics_enabled() {
            error!("Unhandled promise rejection: {:?}", e.reason());
        }
    });

    use_event_with_window("error", |e: ErrorEvent| {
        if config::diagnostics_enabled() {
            error!("Script error: {} ({}:{})", e.message(), e.filename(), e.lineno());
        }
    });

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
