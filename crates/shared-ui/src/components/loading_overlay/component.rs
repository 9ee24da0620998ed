use dioxus::prelude::*;

/// Full-screen spinner shown while the roster is loading.
#[component]
pub fn LoadingOverlay(visible: bool, #[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "loading-overlay",
            "data-visible": if visible { "true" } else { "false" },
            "aria-hidden": if visible { "false" } else { "true" },
            div { class: "loading-spinner" }
            span { class: "loading-label", "{label}" }
        }
    }
}
