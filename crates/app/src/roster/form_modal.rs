use client::{FormField, RosterStore};
use dioxus::prelude::*;
use shared_types::YEAR_OPTIONS;
use shared_ui::{
    Button, ButtonVariant, Form, FormRow, FormSelect, Input, Modal, ModalFooter, SelectOption,
};

use crate::bridge::AppController;

/// Create/edit form. Open whenever the state holds a modal session.
#[component]
pub fn StudentFormModal() -> Element {
    let ctrl = use_context::<AppController>();
    let mut saving = use_signal(|| false);
    let session = ctrl.store().read(|s| s.modal().cloned());

    let Some(session) = session else {
        return rsx! {};
    };
    let form = session.form;
    let mode = session.mode;

    let year_options: Vec<SelectOption> = YEAR_OPTIONS
        .iter()
        .map(|y| SelectOption::new(y.to_string(), format!("Year {y}")))
        .collect();

    let field = {
        let ctrl = ctrl.clone();
        move |field: FormField| {
            let ctrl = ctrl.clone();
            move |evt: FormEvent| ctrl.update_form(field, evt.value())
        }
    };
    let close = {
        let ctrl = ctrl.clone();
        move |_: ()| ctrl.close_modal()
    };
    let cancel = {
        let ctrl = ctrl.clone();
        move |_: MouseEvent| ctrl.close_modal()
    };
    let submit = {
        let ctrl = ctrl.clone();
        move |_: FormEvent| {
            if saving() {
                return;
            }
            let ctrl = ctrl.clone();
            spawn(async move {
                saving.set(true);
                ctrl.submit().await;
                saving.set(false);
            });
        }
    };

    rsx! {
        Modal {
            open: true,
            title: mode.title().to_string(),
            on_close: close,
            Form {
                onsubmit: submit,
                Input {
                    label: "Full Name",
                    required: true,
                    value: form.name.clone(),
                    placeholder: "e.g. Ada Lovelace",
                    on_input: field(FormField::Name),
                }
                Input {
                    label: "Email",
                    input_type: "email",
                    required: true,
                    value: form.email.clone(),
                    placeholder: "student@university.edu",
                    on_input: field(FormField::Email),
                }
                FormRow {
                    Input {
                        label: "Department",
                        required: true,
                        value: form.department.clone(),
                        placeholder: "e.g. Computer Science",
                        on_input: field(FormField::Department),
                    }
                    FormSelect {
                        label: "Year",
                        required: true,
                        value: form.year.clone(),
                        options: year_options,
                        placeholder: "Select year",
                        onchange: field(FormField::Year),
                    }
                }
                Input {
                    label: "Phone Number",
                    input_type: "tel",
                    required: true,
                    value: form.phone_number.clone(),
                    placeholder: "10 digits, e.g. 0123456789",
                    on_input: field(FormField::PhoneNumber),
                }
                ModalFooter {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: cancel,
                        "Cancel"
                    }
                    Button {
                        button_type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "{mode.submit_label()}" }
                    }
                }
            }
        }
    }
}
