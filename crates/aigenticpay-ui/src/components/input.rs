//! Input Field Components
//!
//! Labelled inputs with native browser validation. Setting
//! `input_type: "email"` together with `required` gives the webview's own
//! email syntax check before the surrounding form submits.

use dioxus::prelude::*;

use super::button::join_classes;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Form field name
    pub name: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text (rendered uppercase)
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         required: true,
///         label: "Work Email".to_string(),
///         placeholder: "name@company.com".to_string(),
///         value: draft,
///         oninput: move |v| on_draft.call(v),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = format!("input-{}", props.name);
    let input_class = join_classes("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                name: "{props.name}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
