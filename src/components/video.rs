use dioxus::prelude::*;

use crate::components::Section;
use crate::config::{POSTER_PATH, VIDEO_PATH};

#[allow(non_snake_case)]
#[component]
pub fn Video() -> Element {
    rsx! {
        Section { class: "video".to_string(),
            video {
                autoplay: true,
                muted: true,
                r#loop: true,
                poster: POSTER_PATH,
                source { src: VIDEO_PATH, r#type: "video/mp4" }
            }
        }
    }
}
