use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::DialogConfig;
use views::Upload;

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../size_limit.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Parse the embedded dialog config, falling back to defaults.
fn load_config() -> DialogConfig {
    match DialogConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}: {}", DialogConfig::filename(), e);
            DialogConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Upload { max_duration_secs: config.limits.max_duration_secs }
    }
}
