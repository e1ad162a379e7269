//! Transient notification stack

use dioxus::prelude::*;

use crate::state::use_toasts;

/// Floating notification stack, rendered above everything else
#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 flex flex-col gap-2 w-96",
            for toast in toasts.items() {
                div {
                    key: "{toast.id}",
                    class: "bg-red-50 border border-red-200 text-red-700 rounded-lg shadow-sm p-4",
                    div {
                        class: "flex items-start justify-between",
                        div {
                            p { class: "font-medium text-sm", "{toast.title}" }
                            p { class: "text-sm mt-1", "{toast.description}" }
                        }
                        button {
                            class: "text-red-400 hover:text-red-600 ml-3",
                            onclick: {
                                let id = toast.id;
                                move |_| toasts.dismiss(id)
                            },
                            "\u{2715}"
                        }
                    }
                }
            }
        }
    }
}
