use dioxus::prelude::*;

/// Grid holding the stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "stat-grid", {children} }
    }
}

/// A single figure in the stats panel.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] icon: Element,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "stat-card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            div { class: "stat-icon", {icon} }
            div { class: "stat-body",
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
            }
        }
    }
}
