use dioxus::prelude::*;
use ui::{format_duration_limit, SizeLimitDialog};

/// Demo upload page: a rejected upload opens the size-limit dialog.
#[component]
pub fn Upload(max_duration_secs: u32) -> Element {
    let mut show_limit = use_signal(|| false);
    let limit = format_duration_limit(max_duration_secs);

    rsx! {
        div {
            class: "upload-page",
            h1 { class: "upload-page__title", "Translate audio & video" }
            p {
                class: "upload-page__hint",
                "Files up to {limit} are supported."
            }
            button {
                class: "upload-page__button",
                onclick: move |_| {
                    tracing::info!("Upload rejected: longer than {}s", max_duration_secs);
                    show_limit.set(true);
                },
                "Simulate long upload"
            }
        }

        SizeLimitDialog {
            visible: show_limit(),
            max_duration_secs,
            on_dismiss: move |_| show_limit.set(false),
        }
    }
}
