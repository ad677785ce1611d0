use std::rc::Rc;

use dioxus::prelude::*;

use super::listeners::DialogListeners;
use crate::config::{format_duration_limit, DEFAULT_MAX_DURATION_SECS};
use crate::host::{use_host, Host};
use crate::layout::LayoutMode;
use crate::Icon;
use crate::icons::{FaCircleExclamation, FaXmark};

const DIALOG_CSS: Asset = asset!("/assets/styling/size_limit_dialog.css");

pub const PROMO_URL: &str = "https://murf.ai/";

pub const FEATURES: [&str; 3] = [
    "Unlimited duration",
    "100 free dub minutes",
    "200+ voices & languages",
];

/// Modal telling the user their upload is longer than the tool accepts.
///
/// Visibility belongs to the caller: the dialog never hides itself, it only
/// asks via `on_dismiss` (close button or Escape while visible).
#[component]
pub fn SizeLimitDialog(
    visible: bool,
    on_dismiss: EventHandler<()>,
    #[props(default = DEFAULT_MAX_DURATION_SECS)] max_duration_secs: u32,
) -> Element {
    let host = use_host();
    let layout = use_signal(|| LayoutMode::for_width(host.viewport_width()));
    // Escape arrives from a window listener outside the runtime; it is parked
    // here until the effect below hands it to `on_dismiss`.
    let mut escape_pressed = use_signal(|| false);

    let listeners = use_hook(move || {
        Rc::new(DialogListeners::new(
            host,
            move |mode| {
                let mut layout = layout;
                layout.set(mode);
            },
            move || {
                let mut escape_pressed = escape_pressed;
                escape_pressed.set(true);
            },
        ))
    });
    // The one-shot Escape listener is re-acquired only once the previous
    // press has been delivered.
    listeners.set_visible(visible && !escape_pressed());

    use_effect(move || {
        if escape_pressed() {
            escape_pressed.set(false);
            on_dismiss.call(());
        }
    });

    if !visible {
        return rsx! {};
    }

    let mode = layout();
    let limit = format_duration_limit(max_duration_secs);
    let layout_name = if mode.is_compact() { "compact" } else { "wide" };

    rsx! {
        document::Stylesheet { href: DIALOG_CSS }

        div {
            class: "size-limit-overlay",
            div {
                class: "size-limit-dialog size-limit-dialog--{layout_name}",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "size-limit-dialog-title",
                "data-layout": layout_name,

                button {
                    class: "size-limit-dialog__close",
                    aria_label: "Close",
                    onclick: move |_| on_dismiss.call(()),
                    Icon { icon: FaXmark, width: 28, height: 28 }
                }

                div {
                    class: "size-limit-dialog__icon",
                    Icon { icon: FaCircleExclamation, width: 40, height: 40 }
                }

                h2 {
                    id: "size-limit-dialog-title",
                    class: "size-limit-dialog__title",
                    "⚠️ File Too Long!"
                }
                p {
                    class: "size-limit-dialog__subtitle",
                    "Max limit: {limit} on this tool."
                }

                div {
                    class: "size-limit-dialog__panel",
                    p {
                        class: "size-limit-dialog__lead",
                        "Want to translate full audio/video file?"
                    }
                    ul {
                        class: "size-limit-dialog__features",
                        for feature in FEATURES {
                            li {
                                key: "{feature}",
                                class: "size-limit-dialog__feature",
                                span { class: "size-limit-dialog__check", "✅" }
                                span { "{feature}" }
                            }
                        }
                    }
                    a {
                        class: "size-limit-dialog__cta",
                        href: PROMO_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Try Murf"
                    }
                }
            }
        }
    }
}
