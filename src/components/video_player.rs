use crate::views::export::DisplayLanguage;
use dioxus::prelude::*;

// In-browser playback; the export control only hands it the locators
#[component]
pub fn VideoPlayer(
    locator: String,
    caption_locator: Option<String>,
    display_language: DisplayLanguage,
    is_loading: bool,
) -> Element {
    rsx! {
        div { class: "player",
            video {
                class: "player-video",
                controls: true,
                src: "{locator}",
                if let Some(captions) = &caption_locator {
                    track {
                        kind: "captions",
                        src: "{captions}",
                        srclang: "{display_language.code}",
                        label: "{display_language.name}",
                    }
                }
            }
            if is_loading {
                div { class: "player-overlay",
                    "Loading..."
                }
            }
        }
    }
}
