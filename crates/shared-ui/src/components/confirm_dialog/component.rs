use dioxus::prelude::*;
use dioxus_primitives::alert_dialog as prim;

/// Yes/no confirmation for destructive actions.
///
/// The confirm button calls `on_confirm` only; the caller closes the dialog by
/// flipping `open`. Cancel, Escape and any other dismissal call `on_cancel`.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::AlertDialogRoot {
            class: "confirm-overlay",
            open,
            on_open_change: move |open: bool| {
                if !open {
                    on_cancel.call(());
                }
            },
            ConfirmContent {
                prim::AlertDialogTitle { class: "confirm-title", "{title}" }
                prim::AlertDialogDescription { class: "confirm-message", "{message}" }
                prim::AlertDialogActions { class: "confirm-actions",
                    prim::AlertDialogCancel { class: "btn confirm-cancel", "{cancel_label}" }
                    button {
                        class: "btn confirm-action",
                        r#type: "button",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn ConfirmContent(mut props: prim::AlertDialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("confirm-content".to_string());
    }

    rsx! {
        prim::AlertDialogContent { ..props }
    }
}
