use crate::components::{SaverHandle, VideoPlayer};
use crate::config::AppConfig;
use crate::views::export::handlers::trigger_download;
use crate::views::export::types::{ActionView, DownloadState, MediaReference};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaDownload, FaSpinner},
    Icon,
};

#[component]
pub fn ExportControl(media: MediaReference) -> Element {
    let mut download = use_signal(DownloadState::default);
    let saver = try_use_context::<SaverHandle>().unwrap_or_else(SaverHandle::platform);
    let config = try_use_context::<AppConfig>().unwrap_or_default();

    let action = ActionView::for_media(&media, download());

    let handle_download = {
        let media = media.clone();
        move |_: MouseEvent| {
            trigger_download(&media, download(), &config, saver.0.as_ref(), |state| {
                download.set(state)
            });
        }
    };

    rsx! {
        div { class: "export-control",
            div { class: "export-header",
                h2 { class: "export-title", "Video" }
                DownloadAction { view: action, on_download: handle_download }
            }
            if let Some(locator) = media.locator() {
                VideoPlayer {
                    locator: locator.to_string(),
                    caption_locator: media.caption_locator().map(str::to_string),
                    display_language: media.display_language.clone(),
                    is_loading: media.is_loading,
                }
            }
        }
    }
}

// Header action: nothing, the download button, or the disabled busy button
#[component]
fn DownloadAction(view: ActionView, on_download: EventHandler<MouseEvent>) -> Element {
    match view {
        ActionView::Hidden => rsx! {},
        ActionView::Enabled => rsx! {
            button {
                class: "btn btn-primary",
                title: "Download video",
                onclick: move |evt| on_download.call(evt),
                Icon {
                    icon: FaDownload,
                    width: 16,
                    height: 16,
                    class: "btn-icon",
                }
                "{view.label()}"
            }
        },
        ActionView::Busy => rsx! {
            button {
                class: "btn btn-busy",
                disabled: true,
                Icon {
                    icon: FaSpinner,
                    width: 16,
                    height: 16,
                    class: "btn-icon spin",
                }
                "{view.label()}"
            }
        },
    }
}
