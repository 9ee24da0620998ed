//! Adapters binding the headless controller to Dioxus signals and toasts.

use client::{Controller, HttpStudentApi, Notice, NoticeLevel, Notifier, RosterState, RosterStore};
use dioxus::prelude::*;
use shared_ui::{ToastOptions, Toasts};

/// Controller as wired into the running app.
pub type AppController = Controller<HttpStudentApi, SignalStore, ToastNotifier>;

/// Roster state held in a Dioxus signal, so every update re-renders readers.
#[derive(Clone, Copy)]
pub struct SignalStore(pub Signal<RosterState>);

impl RosterStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&RosterState) -> R) -> R {
        f(&self.0.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut RosterState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut state)
    }
}

/// Routes controller notices to the toast provider.
#[derive(Clone)]
pub struct ToastNotifier(pub Toasts);

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => self.0.success(notice.message, ToastOptions::new()),
            NoticeLevel::Error => self.0.error(notice.message, ToastOptions::new()),
        }
    }
}

/// Build the session controller once and share it with the page tree.
pub fn use_roster_controller() -> AppController {
    let state = use_signal(RosterState::new);
    let toasts = shared_ui::use_toast();
    use_context_provider(|| {
        let api = HttpStudentApi::from_config(client::config::config());
        tracing::info!(base_url = api.base_url(), "Roster client ready");
        Controller::new(api, SignalStore(state), ToastNotifier(toasts))
    })
}
