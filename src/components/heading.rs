use dioxus::prelude::*;

use crate::components::Section;
use crate::utils::format::{format_short_date, parse_wedding_date, weekday_label};

/// Wedding date as `yy.MM.dd` with its weekday underneath.
///
/// An unparseable date aborts the render with `DateError::Invalid`; the
/// nearest error boundary shows the error screen.
#[allow(non_snake_case)]
#[component]
pub fn Heading(date: String) -> Element {
    let wedding_date = parse_wedding_date(&date)?;
    let label = format_short_date(wedding_date);
    let day = weekday_label(wedding_date);

    rsx! {
        Section { class: "heading".to_string(),
            div { class: "txt-date", "{label}" }
            div { class: "txt-day", "{day}" }
        }
    }
}
