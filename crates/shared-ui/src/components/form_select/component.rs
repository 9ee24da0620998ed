use dioxus::prelude::*;

/// One `<option>` of a [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Native `<select>` used by the filter bar and the student form.
///
/// When `placeholder` is set it is rendered as a leading option with an
/// empty value, which the filters treat as "any".
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    options: Vec<SelectOption>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = false)] required: bool,
    #[props(default)] onchange: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "select-field",
            if !label.is_empty() {
                span { class: "select-label",
                    "{label}"
                    if required {
                        span { class: "select-required", " *" }
                    }
                }
            }
            select {
                class: "form-select",
                value: value.clone(),
                required: required,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
