use log::info;
use yew::prelude::*;

mod config;
mod listeners;
mod viewport;
mod contact {
    pub mod controller;
    pub mod dom;
    pub mod notification;
    pub mod scheduler;
    pub mod validation;
}
mod components {
    pub mod contact_form;
    pub mod header;
}
mod pages {
    pub mod home;
}

use components::header::Header;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Header />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Vrisa site");
    yew::Renderer::<App>::new().render();
}
