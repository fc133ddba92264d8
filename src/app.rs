use dioxus::prelude::*;

use crate::api::fetch_wedding;
use crate::components::{ErrorScreenBoundary, WeddingPage};
use crate::config::ApiConfig;
use crate::hooks::use_wedding;
use crate::MAIN_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let lifecycle = use_wedding(|| {
        let config = ApiConfig::from_build_env();
        async move { fetch_wedding(&config).await }
    });
    let state = lifecycle.read().state().clone();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "Wedding Invitation" }
        document::Meta { name: "theme-color", content: "#fdfaf6" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        ErrorScreenBoundary {
            WeddingPage { state }
        }
    }
}
