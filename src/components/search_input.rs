//! Free-text search box for the event list

use dioxus::prelude::*;

/// Search input that pushes each keystroke to the event table, which applies
/// its own debounce before querying.
#[component]
pub fn SearchInput(on_search: EventHandler<String>) -> Element {
    let mut term = use_signal(String::new);

    rsx! {
        div {
            class: "relative flex-1 max-w-md",
            input {
                r#type: "text",
                value: "{term}",
                oninput: move |e| {
                    term.set(e.value());
                    on_search.call(e.value());
                },
                placeholder: "Search events...",
                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
            }
            if !term().is_empty() {
                button {
                    class: "absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600",
                    onclick: move |_| {
                        term.set(String::new());
                        on_search.call(String::new());
                    },
                    "\u{2715}"
                }
            } else {
                span {
                    class: "absolute inset-y-0 right-0 pr-3 flex items-center text-xs text-gray-400",
                    kbd { class: "px-1.5 py-0.5 border border-gray-300 rounded bg-gray-50", "/" }
                }
            }
        }
    }
}
