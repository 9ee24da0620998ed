use dioxus::prelude::*;
use shared_types::{PageItem, PaginationMeta};

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// Page-number bar with Previous/Next.
///
/// Renders nothing when everything fits on one page. `on_page` receives the
/// requested page number; clamping is the caller's job.
#[component]
pub fn PaginationBar(meta: PaginationMeta, on_page: EventHandler<usize>) -> Element {
    if !meta.is_visible() {
        return rsx! {};
    }
    let current = meta.page;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: !meta.has_prev,
                onclick: move |_| on_page.call(current.saturating_sub(1)),
                "Previous"
            }
            for (i, item) in meta.items().into_iter().enumerate() {
                {match item {
                    PageItem::Page(n) => rsx! {
                        Button {
                            key: "page-{n}",
                            variant: if n == current { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                            size: ButtonSize::Small,
                            onclick: move |_| on_page.call(n),
                            "{n}"
                        }
                    },
                    PageItem::Ellipsis => rsx! {
                        span { key: "gap-{i}", class: "pagination-ellipsis", "\u{2026}" }
                    },
                }}
            }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: !meta.has_next,
                onclick: move |_| on_page.call(current + 1),
                "Next"
            }
            span { class: "pagination-info",
                "Page {current} of {meta.total_pages} ({meta.total} students)"
            }
        }
    }
}
