use dioxus::prelude::*;

use crate::components::Section;
use crate::shared::types::{Person, WeddingInfo};

/// Intro and invitation text plus the couple's names.
///
/// Line breaks in the text are kept by the `pre-line` rule on `.message`.
#[allow(non_snake_case)]
#[component]
pub fn Invitation(info: WeddingInfo) -> Element {
    let message = info.message.clone().unwrap_or_default();
    rsx! {
        Section { class: "invitation".to_string(),
            if let Some(intro) = &message.intro {
                p { class: "message intro", "{intro}" }
            }
            if let Some(invitation) = &message.invitation {
                p { class: "message", "{invitation}" }
            }
            div { class: "couple",
                if let Some(groom) = &info.groom {
                    PersonLine { role: "Groom".to_string(), person: groom.clone() }
                }
                if let Some(bride) = &info.bride {
                    PersonLine { role: "Bride".to_string(), person: bride.clone() }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn PersonLine(role: String, person: Person) -> Element {
    rsx! {
        div { class: "person",
            span { class: "role", "{role}" }
            span { class: "name", "{person.name}" }
            if let Some(phone) = &person.phone_number {
                a { class: "phone", href: "tel:{phone}", "Call" }
            }
        }
    }
}
