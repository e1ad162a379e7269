//! Root application component

use dioxus::prelude::*;

use crate::components::ToastStack;
use crate::routes::Route;
use crate::state::ToastState;

/// Root application component
#[component]
pub fn App() -> Element {
    // Notification state is shared with every page through context
    use_context_provider(ToastState::new);

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        ToastStack {}

        Router::<Route> {}
    }
}
