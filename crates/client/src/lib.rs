pub mod api;
pub mod config;
pub mod controller;
pub mod form;
pub mod notify;
pub mod query;
pub mod state;
pub mod stats;
pub mod store;
pub mod view;

pub use api::{HttpStudentApi, StudentApi};
pub use controller::Controller;
pub use form::{FormField, ModalMode, ModalSession, StudentForm};
pub use notify::{MemoryNotifier, Notice, NoticeLevel, Notifier};
pub use query::{Facets, QueryInputs, SortKey, YearFacet};
pub use state::{LoadOutcome, LoadTicket, RosterState};
pub use stats::RosterStats;
pub use store::RosterStore;
pub use view::{RosterView, RowAction, StudentRow};
