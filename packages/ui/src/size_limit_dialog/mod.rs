//! Dialog shown when an upload is longer than the tool accepts.

mod component;
mod listeners;

pub use component::{SizeLimitDialog, FEATURES, PROMO_URL};
pub use listeners::DialogListeners;
