use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// `thead > tr` holding one column header per label.
#[component]
pub fn DataTableHeader(columns: Vec<&'static str>) -> Element {
    rsx! {
        thead {
            tr {
                for col in columns {
                    th { key: "{col}", "{col}" }
                }
            }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        td { class: "{class}", {children} }
    }
}

/// Single full-width row shown when there is nothing to list.
#[component]
pub fn DataTableEmpty(colspan: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}
