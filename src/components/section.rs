use dioxus::prelude::*;

use crate::utils::format::class_names;

/// Wrap children in a `section` that always carries the base `section` class.
#[allow(non_snake_case)]
#[component]
pub fn Section(class: Option<String>, children: Element) -> Element {
    let class = class_names("section", class.as_deref());
    rsx! {
        section { class: "{class}", {children} }
    }
}
