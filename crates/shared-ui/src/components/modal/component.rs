use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop.
///
/// Clicking the backdrop calls `on_close`. The backdrop is a sibling of the
/// panel, so clicks inside the panel never reach it. Escape handling is left
/// to the page, which owns the keyboard shortcuts.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "modal-root",
            div { class: "modal-backdrop", onclick: move |_| on_close.call(()) }
            div {
                class: "modal-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Right-aligned button row at the bottom of a modal.
#[component]
pub fn ModalFooter(children: Element) -> Element {
    rsx! {
        div { class: "modal-footer", {children} }
    }
}
