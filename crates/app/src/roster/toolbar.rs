use client::{query::ALL_SORT_KEYS, RosterStore, SortKey};
use dioxus::prelude::*;
use shared_types::YEAR_OPTIONS;
use shared_ui::{Button, ButtonVariant, FormSelect, SearchBar, SelectOption};

use crate::bridge::AppController;

/// Search box plus department, year and sort selectors.
#[component]
pub fn RosterToolbar(on_search_mounted: EventHandler<MountedEvent>) -> Element {
    let ctrl = use_context::<AppController>();
    let (query, departments) = ctrl
        .store()
        .read(|s| (s.query().clone(), s.departments().to_vec()));

    let department_options: Vec<SelectOption> = departments
        .iter()
        .map(|d| SelectOption::new(d.clone(), d.clone()))
        .collect();
    let year_options: Vec<SelectOption> = YEAR_OPTIONS
        .iter()
        .map(|y| SelectOption::new(y.to_string(), format!("Year {y}")))
        .collect();
    let sort_options: Vec<SelectOption> = ALL_SORT_KEYS
        .iter()
        .map(|k| SelectOption::new(k.as_key(), k.label()))
        .collect();

    let on_search = {
        let ctrl = ctrl.clone();
        move |term: String| ctrl.search(&term)
    };
    let on_department = {
        let ctrl = ctrl.clone();
        let year = query.year.clone();
        move |evt: FormEvent| ctrl.filter(&evt.value(), &year)
    };
    let on_year = {
        let ctrl = ctrl.clone();
        let department = query.department.clone();
        move |evt: FormEvent| ctrl.filter(&department, &evt.value())
    };
    let on_sort = {
        let ctrl = ctrl.clone();
        move |evt: FormEvent| ctrl.sort(SortKey::from_key(&evt.value()))
    };
    let on_reset = {
        let ctrl = ctrl.clone();
        move |_: MouseEvent| ctrl.reset_filters()
    };

    rsx! {
        SearchBar {
            value: query.search.clone(),
            on_search,
            on_mounted: move |evt| on_search_mounted.call(evt),
            FormSelect {
                value: query.department.clone(),
                options: department_options,
                placeholder: "All Departments",
                onchange: on_department,
            }
            FormSelect {
                value: query.year.clone(),
                options: year_options,
                placeholder: "All Years",
                onchange: on_year,
            }
            FormSelect {
                value: query.sort.as_key().to_string(),
                options: sort_options,
                onchange: on_sort,
            }
            Button {
                variant: ButtonVariant::Ghost,
                disabled: query.is_default(),
                onclick: on_reset,
                "Reset Filters"
            }
        }
    }
}
