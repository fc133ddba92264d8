use dioxus::prelude::*;

use crate::components::Section;
use crate::shared::types::Location;

#[allow(non_snake_case)]
#[component]
pub fn LocationSection(location: Location) -> Element {
    rsx! {
        Section { class: "location".to_string(),
            h2 { class: "title", "Location" }
            p { class: "venue", "{location.name}" }
            if let Some(address) = &location.address {
                p { class: "address", "{address}" }
            }
            if let Some(link) = &location.link {
                a { class: "map-link", href: "{link}", target: "_blank", rel: "noreferrer", "Open map" }
            }
        }
    }
}
