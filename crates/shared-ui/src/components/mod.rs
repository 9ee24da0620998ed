// Primitives
pub mod button;
pub mod form;
pub mod form_select;
pub mod input;

// Layout
pub mod data_table;
pub mod page_header;
pub mod search_bar;
pub mod stat_card;

// Overlays
pub mod confirm_dialog;
pub mod loading_overlay;
pub mod modal;
pub mod toast;

// Depends on button
pub mod pagination;

pub use button::*;
pub use confirm_dialog::*;
pub use data_table::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use loading_overlay::*;
pub use modal::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use stat_card::*;
pub use toast::*;
