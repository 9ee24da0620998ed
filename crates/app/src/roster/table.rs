use client::{RowAction, StudentRow};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::PaginationMeta;
use shared_ui::{
    Button, ButtonSize, ButtonVariant, DataTable, DataTableBody, DataTableCell, DataTableEmpty,
    DataTableHeader, DataTableRow, PaginationBar,
};

use crate::bridge::AppController;
use crate::shortcuts::SCROLL_TOP_JS;

const COLUMNS: [&str; 8] = [
    "ID",
    "Name",
    "Email",
    "Department",
    "Year",
    "Phone",
    "Created",
    "Actions",
];

const EMPTY_MESSAGE: &str = "No students found. Click \"Add Student\" to get started.";

#[component]
pub fn StudentTable(rows: Vec<StudentRow>, is_empty: bool) -> Element {
    rsx! {
        DataTable {
            DataTableHeader { columns: COLUMNS.to_vec() }
            DataTableBody {
                if is_empty {
                    DataTableEmpty { colspan: COLUMNS.len(), message: EMPTY_MESSAGE.to_string() }
                }
                for row in rows {
                    StudentTableRow { key: "{row.id}", row: row.clone() }
                }
            }
        }
    }
}

#[component]
fn StudentTableRow(row: StudentRow) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { class: "cell-muted", "#{row.id}" }
            DataTableCell { "{row.name}" }
            DataTableCell { "{row.email}" }
            DataTableCell { "{row.department}" }
            DataTableCell {
                span { class: "year-badge", "{row.year_label}" }
            }
            DataTableCell { "{row.phone_number}" }
            DataTableCell { class: "cell-muted", "{row.created_label}" }
            DataTableCell { class: "cell-actions",
                for action in row.actions {
                    RowActionButton { key: "{action.label()}", action }
                }
            }
        }
    }
}

#[component]
fn RowActionButton(action: RowAction) -> Element {
    let ctrl = use_context::<AppController>();
    let variant = match action {
        RowAction::Edit(_) => ButtonVariant::Secondary,
        RowAction::Delete(_) => ButtonVariant::Danger,
    };
    let onclick = move |_: MouseEvent| {
        let ctrl = ctrl.clone();
        spawn(async move {
            ctrl.dispatch(action).await;
        });
    };

    rsx! {
        Button {
            variant,
            size: ButtonSize::Small,
            onclick,
            if matches!(action, RowAction::Edit(_)) {
                Icon { icon: LdPencil, width: 14, height: 14 }
            } else {
                Icon { icon: LdTrash2, width: 14, height: 14 }
            }
            "{action.label()}"
        }
    }
}

/// Page controls under the table; moving to another page scrolls back up.
#[component]
pub fn TablePagination(meta: PaginationMeta) -> Element {
    let ctrl = use_context::<AppController>();

    rsx! {
        PaginationBar {
            meta,
            on_page: move |page: usize| {
                ctrl.go_to_page(page);
                spawn(async move {
                    if let Err(e) = document::eval(SCROLL_TOP_JS).await {
                        tracing::debug!(error = ?e, "Could not scroll to top");
                    }
                });
            },
        }
    }
}
