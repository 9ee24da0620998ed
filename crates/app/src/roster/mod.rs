mod form_modal;
mod stats;
mod table;
mod toolbar;

use std::rc::Rc;

use client::RosterStore;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPlus, LdRefreshCw};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, ConfirmDialog, LoadingOverlay, PageHeader};

use crate::bridge::use_roster_controller;
use crate::shortcuts::{KeyPress, Shortcut, KEY_LISTENER_JS};

const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this student? This action cannot be undone.";

/// The single page of the app: stats, query controls, the student table and
/// the overlays driven by it.
#[component]
pub fn RosterPage() -> Element {
    let ctrl = use_roster_controller();
    let mut search_input: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    {
        let ctrl = ctrl.clone();
        use_hook(move || {
            spawn(async move { ctrl.start().await });
        });
    }

    {
        let ctrl = ctrl.clone();
        use_future(move || {
            let ctrl = ctrl.clone();
            async move {
                let mut listener = document::eval(KEY_LISTENER_JS);
                while let Ok(press) = listener.recv::<KeyPress>().await {
                    match Shortcut::from_press(&press) {
                        Some(Shortcut::CloseModal) => ctrl.close_modal(),
                        Some(Shortcut::FocusSearch) => {
                            let mounted = search_input.read().clone();
                            if let Some(input) = mounted {
                                if let Err(e) = input.set_focus(true).await {
                                    tracing::debug!(error = ?e, "Could not focus search box");
                                }
                            }
                        }
                        None => {}
                    }
                }
            }
        });
    }

    let view = ctrl.view();
    let pending_delete = ctrl.store().read(|s| s.pending_delete());

    let open_create = {
        let ctrl = ctrl.clone();
        move |_: MouseEvent| ctrl.open_create()
    };
    let refresh = {
        let ctrl = ctrl.clone();
        move |_: MouseEvent| {
            let ctrl = ctrl.clone();
            spawn(async move {
                ctrl.refresh().await;
            });
        }
    };
    let confirm_delete = {
        let ctrl = ctrl.clone();
        move |_: ()| {
            let Some(id) = ctrl.take_pending_delete() else {
                return;
            };
            let ctrl = ctrl.clone();
            spawn(async move {
                ctrl.delete(id).await;
            });
        }
    };
    let cancel_delete = {
        let ctrl = ctrl.clone();
        move |_: ()| ctrl.cancel_delete()
    };

    rsx! {
        div { class: "roster-page",
            PageHeader {
                title: "Student Management",
                subtitle: "Manage student records, departments and enrollment years",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: refresh,
                    Icon { icon: LdRefreshCw, width: 16, height: 16 }
                    "Refresh"
                }
                Button {
                    onclick: open_create,
                    Icon { icon: LdPlus, width: 16, height: 16 }
                    "Add Student"
                }
            }

            stats::StatsPanel { stats: view.stats }

            toolbar::RosterToolbar {
                on_search_mounted: move |evt: MountedEvent| search_input.set(Some(evt.data())),
            }

            table::StudentTable { rows: view.rows.clone(), is_empty: view.is_empty }

            if let Some(meta) = view.pagination {
                table::TablePagination { meta }
            }
        }

        form_modal::StudentFormModal {}

        ConfirmDialog {
            open: pending_delete.is_some(),
            title: "Delete Student",
            message: DELETE_CONFIRMATION.to_string(),
            on_confirm: confirm_delete,
            on_cancel: cancel_delete,
        }

        LoadingOverlay { visible: view.loading }
    }
}
