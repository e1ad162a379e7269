//! Reusable UI components

mod event_card;
mod event_filters;
mod event_table;
mod loading;
mod new_event_card;
mod refresh_controls;
mod search_input;
mod toasts;

pub use event_card::*;
pub use event_filters::*;
pub use event_table::*;
pub use loading::*;
pub use new_event_card::*;
pub use refresh_controls::*;
pub use search_input::*;
pub use toasts::*;
