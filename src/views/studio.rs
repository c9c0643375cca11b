use crate::views::export::{DisplayLanguage, ExportControl, MediaReference};
use dioxus::prelude::*;

const SAMPLE_LOCATOR: &str =
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4";

#[component]
pub fn Studio() -> Element {
    // Form state
    let mut locator = use_signal(|| SAMPLE_LOCATOR.to_string());
    let mut caption_locator = use_signal(String::new);
    let mut language_code = use_signal(|| DisplayLanguage::default().code);
    let mut is_loading = use_signal(|| false);

    let media = MediaReference {
        locator: Some(locator()),
        caption_locator: Some(caption_locator()),
        display_language: DisplayLanguage::from_code(&language_code()),
        is_loading: is_loading(),
    };

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title",
                    "Media Studio"
                }
                p { class: "page-subtitle", "Preview a video and save it to your device" }
            }

            div { class: "panel panel-padded",
                div { class: "field",
                    label { class: "field-label", "Video URL" }
                    input {
                        class: "text-input",
                        placeholder: "https://... or gs://bucket/object.mp4",
                        value: "{locator}",
                        oninput: move |evt| locator.set(evt.value()),
                    }
                }

                div { class: "field",
                    label { class: "field-label", "Captions URL" }
                    input {
                        class: "text-input",
                        placeholder: "Optional WebVTT file",
                        value: "{caption_locator}",
                        oninput: move |evt| caption_locator.set(evt.value()),
                    }
                }

                div { class: "field field-row",
                    label { class: "field-label", "Caption language" }
                    select {
                        class: "text-input select-input",
                        value: "{language_code}",
                        onchange: move |evt| language_code.set(evt.value()),
                        for language in DisplayLanguage::catalogue() {
                            option { key: "{language.code}", value: "{language.code}", "{language.name}" }
                        }
                    }
                    label { class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: is_loading(),
                            onchange: move |evt| is_loading.set(evt.checked()),
                        }
                        "Still loading"
                    }
                }
            }

            div { class: "panel",
                ExportControl { media }
            }
        }
    }
}
