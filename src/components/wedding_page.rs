use dioxus::prelude::*;

use crate::components::{
    FullScreenMessage, Gallery, Heading, Invitation, LocationSection, MessageKind, Video,
};
use crate::state::FetchState;

/// Render policy for the root view: loading first, then error, then the page.
#[allow(non_snake_case)]
#[component]
pub fn WeddingPage(state: FetchState) -> Element {
    match state {
        // Idle only exists before the first attempt starts
        FetchState::Idle | FetchState::Loading => rsx! {
            FullScreenMessage { kind: MessageKind::Loading }
        },
        FetchState::Error(_) => rsx! {
            FullScreenMessage { kind: MessageKind::Error }
        },
        FetchState::Ready(info) => rsx! {
            div { class: "container",
                Heading { date: info.date.clone() }
                Video {}
                Invitation { info: info.clone() }
                if !info.gallery_images.is_empty() {
                    Gallery { images: info.gallery_images.clone() }
                }
                if let Some(location) = &info.location {
                    LocationSection { location: location.clone() }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::shared::types::WeddingInfo;

    fn render(state: FetchState) -> String {
        dioxus_ssr::render_element(rsx! { WeddingPage { state } })
    }

    #[test]
    fn loading_hides_everything_else() {
        let html = render(FetchState::Loading);
        assert!(html.contains("fullscreen-message loading"), "{html}");
        assert!(!html.contains("container"), "{html}");
    }

    #[test]
    fn error_hides_everything_else() {
        let html = render(FetchState::Error(FetchError::parse("eof")));
        assert!(html.contains("fullscreen-message error"), "{html}");
        assert!(!html.contains("container"), "{html}");
        // cause is logged, never shown
        assert!(!html.contains("eof"), "{html}");
    }

    #[test]
    fn ready_composes_sections() {
        let info: WeddingInfo = serde_json::from_str(
            r#"{
                "date": "2025-05-17",
                "location": { "name": "Grand Hall" },
                "galleryImages": ["/assets/1.jpg"]
            }"#,
        )
        .unwrap();
        let html = render(FetchState::Ready(info));
        assert!(html.contains(r#"<div class="container">"#), "{html}");
        assert!(html.contains("25.05.17"), "{html}");
        assert!(html.contains("Saturday"), "{html}");
        assert!(html.contains("<video"), "{html}");
        assert!(html.contains("Grand Hall"), "{html}");
        assert!(html.contains(r#"src="/assets/1.jpg""#), "{html}");
        assert!(!html.contains("fullscreen-message"), "{html}");
    }

    #[test]
    fn ready_skips_empty_optional_sections() {
        let info: WeddingInfo = serde_json::from_str(r#"{"date":"2025-05-17"}"#).unwrap();
        let html = render(FetchState::Ready(info));
        assert!(!html.contains("section gallery"), "{html}");
        assert!(!html.contains("section location"), "{html}");
    }
}
