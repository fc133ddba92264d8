use dioxus::prelude::*;

use crate::components::Section;

#[allow(non_snake_case)]
#[component]
pub fn Gallery(images: Vec<String>) -> Element {
    rsx! {
        Section { class: "gallery".to_string(),
            h2 { class: "title", "Gallery" }
            ul { class: "grid",
                for (i, src) in images.iter().enumerate() {
                    li { key: "{i}",
                        img { src: "{src}", alt: "photo {i + 1}" }
                    }
                }
            }
        }
    }
}
