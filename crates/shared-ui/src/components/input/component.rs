use dioxus::prelude::*;

/// Labelled text input for the student form.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    /// Receives the mounted element, e.g. to move focus into the field.
    #[props(default)]
    on_mounted: Option<EventHandler<MountedEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "text-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "field",
            if !label.is_empty() {
                span { class: "field-label",
                    "{label}"
                    if required {
                        span { class: "field-required", " *" }
                    }
                }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                onmounted: move |evt| {
                    if let Some(handler) = &on_mounted {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
        }
    }
}
