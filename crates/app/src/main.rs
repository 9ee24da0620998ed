use dioxus::prelude::*;

mod bridge;
mod roster;
mod shortcuts;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = client::config::load_config();
    let level = config
        .logging
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logger] failed to initialize: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Student Management" }
        shared_ui::ToastProvider {
            roster::RosterPage {}
        }
    }
}
