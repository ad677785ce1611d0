//! This crate contains all shared UI for the workspace.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod config;
pub use config::{format_duration_limit, DialogConfig};

pub mod host;
pub use host::{use_host, Host, MemoryHost, SharedHost, Subscription};

pub mod layout;
pub use layout::{LayoutMode, COMPACT_MAX_WIDTH};

mod size_limit_dialog;
pub use size_limit_dialog::{DialogListeners, SizeLimitDialog, FEATURES, PROMO_URL};
