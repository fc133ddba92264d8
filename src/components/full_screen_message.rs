use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Loading,
    Error,
}

/// Page-filling placeholder shown instead of the invitation.
#[allow(non_snake_case)]
#[component]
pub fn FullScreenMessage(kind: MessageKind) -> Element {
    match kind {
        MessageKind::Loading => rsx! {
            div { class: "fullscreen-message loading", role: "status",
                div { class: "spinner" }
                p { "Loading the invitation..." }
            }
        },
        MessageKind::Error => rsx! {
            div { class: "fullscreen-message error", role: "alert",
                div { class: "icon", "!" }
                p { "Failed to load the invitation." }
                p { class: "hint", "Please try again shortly." }
            }
        },
    }
}

/// Shows the error screen when anything below fails to render.
#[allow(non_snake_case)]
#[component]
pub fn ErrorScreenBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! {
                FullScreenMessage { kind: MessageKind::Error }
            },
            {children}
        }
    }
}
