use crate::config::AppConfig;
use crate::views::export::{platform_saver, FileSaver};
use dioxus::prelude::*;
use std::rc::Rc;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

/// Platform file saver shared with every screen under the shell.
#[derive(Clone)]
pub struct SaverHandle(pub Rc<dyn FileSaver>);

impl SaverHandle {
    pub fn platform() -> Self {
        Self(platform_saver())
    }
}

/// Document root: metadata, font and the provider chain around `children`.
#[component]
pub fn PageShell(children: Element) -> Element {
    let config = use_context_provider(AppConfig::load);
    let font_href = config.font.stylesheet_href();
    let font_family = config.font.css_family();

    rsx! {
        document::Title { "{config.site.title}" }
        document::Meta { name: "description", content: "{config.site.description}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: "{font_href}" }

        div { class: "app-root", style: "font-family: {font_family}",
            ThemeProvider {
                SaverProvider { {children} }
            }
        }
    }
}

#[component]
fn ThemeProvider(children: Element) -> Element {
    let mut theme = use_context_provider(|| Signal::new(Theme::default()));
    let toggle_label = match theme() {
        Theme::Dark => "Light mode",
        Theme::Light => "Dark mode",
    };

    rsx! {
        div { class: "theme {theme().class()}",
            header { class: "shell-header",
                button {
                    class: "theme-toggle",
                    onclick: move |_| theme.set(theme().toggled()),
                    "{toggle_label}"
                }
            }
            {children}
        }
    }
}

#[component]
fn SaverProvider(children: Element) -> Element {
    use_context_provider(SaverHandle::platform);

    rsx! {
        {children}
    }
}
