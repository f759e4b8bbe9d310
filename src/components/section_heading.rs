use dioxus::prelude::*;

/// Section title with optional subtitle
#[component]
pub fn SectionHeading(
    title: String,
    #[props(default)] subtitle: Option<String>,
    /// Light text for dark backgrounds
    #[props(default = false)]
    light: bool,
) -> Element {
    let tone = if light { " light" } else { "" };

    rsx! {
        div { class: "section-heading{tone}",
            h2 { class: "section-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
