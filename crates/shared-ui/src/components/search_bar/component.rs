use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

/// Toolbar row: a search box followed by filter selects and action buttons.
#[component]
pub fn SearchBar(
    value: String,
    on_search: EventHandler<String>,
    #[props(default = "Search by name, email or department...".to_string())] placeholder: String,
    /// Receives the search input once mounted, so callers can focus it.
    #[props(default)]
    on_mounted: Option<EventHandler<MountedEvent>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            div { class: "search-box",
                span { class: "search-icon",
                    Icon { icon: LdSearch, width: 16, height: 16 }
                }
                input {
                    class: "search-input",
                    r#type: "search",
                    value: value,
                    placeholder: placeholder,
                    "aria-label": "Search students",
                    oninput: move |evt| on_search.call(evt.value()),
                    onmounted: move |evt| {
                        if let Some(handler) = &on_mounted {
                            handler.call(evt);
                        }
                    },
                }
                kbd { class: "search-hint", "Ctrl K" }
            }
            div { class: "search-controls", {children} }
        }
    }
}
