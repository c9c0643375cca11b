#![recursion_limit = "256"]

use dioxus::prelude::*;

use components::PageShell;
use views::Studio;

mod components;
mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Studio {},
}

fn main() {
    dioxus::logger::initialize_default();

    tracing::info!(
        "Starting application with features: desktop={} web={}",
        cfg!(feature = "desktop"),
        cfg!(feature = "web")
    );

    // Launch the app based on target platform
    #[cfg(feature = "desktop")]
    {
        LaunchBuilder::desktop().launch(App);
    }

    #[cfg(feature = "web")]
    {
        LaunchBuilder::web().launch(App);
    }

    #[cfg(not(any(feature = "desktop", feature = "web")))]
    {
        LaunchBuilder::new().launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    rsx! {
        PageShell { Outlet::<Route> {} }
    }
}
