use client::RosterStats;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBuilding2, LdGraduationCap, LdListFilter, LdUsers};
use dioxus_free_icons::Icon;
use shared_ui::{StatCard, StatGrid};

#[component]
pub fn StatsPanel(stats: RosterStats) -> Element {
    rsx! {
        StatGrid {
            StatCard {
                label: "Total Students",
                value: stats.total.to_string(),
                icon: rsx! { Icon { icon: LdUsers, width: 20, height: 20 } },
            }
            StatCard {
                label: "Departments",
                value: stats.departments.to_string(),
                icon: rsx! { Icon { icon: LdBuilding2, width: 20, height: 20 } },
            }
            StatCard {
                label: "Average Year",
                value: stats.average_year_label(),
                icon: rsx! { Icon { icon: LdGraduationCap, width: 20, height: 20 } },
            }
            StatCard {
                label: "Showing",
                value: stats.active.to_string(),
                icon: rsx! { Icon { icon: LdListFilter, width: 20, height: 20 } },
            }
        }
    }
}
