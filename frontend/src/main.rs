use yew::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::Event;

mod config;
mod observer;
mod components {
    pub mod lazy_image;
    pub mod modal;
    pub mod nav;
    pub mod reveal;
    pub mod scroll;
    pub mod slider;
    pub mod tabs;
}
mod pages {
    pub mod home;
}

use pages::home::Home;


#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            info!("Page tree built");
            || ()
        },
        (),
    );

    use_event_with_window("load", |_: Event| {
        info!("Page fully loaded");
    });

    html! {
        <Home />
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
