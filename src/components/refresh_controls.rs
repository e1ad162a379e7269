//! Refresh trigger and per-site progress display

use dioxus::prelude::*;

use crate::refresh::{RefreshProgress, RefreshScope};
use crate::state::Site;

#[derive(Props, Clone, PartialEq)]
pub struct RefreshControlsProps {
    pub scope: Signal<RefreshScope>,
    pub progress: ReadOnlySignal<RefreshProgress>,
    pub refreshed_sites: ReadOnlySignal<Vec<Site>>,
    pub on_refresh: EventHandler<()>,
}

/// Site selector, refresh button and the summary of sites refreshed so far
/// in the current run.
#[component]
pub fn RefreshControls(props: RefreshControlsProps) -> Element {
    let mut scope = props.scope;
    let progress = props.progress;
    let refreshed_sites = props.refreshed_sites;

    let button_label = match progress() {
        RefreshProgress::Idle => "Refresh".to_string(),
        RefreshProgress::Starting => "Refreshing".to_string(),
        RefreshProgress::Site(site) => format!("Refreshing {site}"),
    };

    rsx! {
        div {
            class: "flex items-start justify-between gap-6",

            // Refresh control
            div {
                class: "flex items-center gap-3",
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                    disabled: progress().is_active(),
                    onchange: move |e| scope.set(RefreshScope::parse(&e.value())),
                    option { value: "all", selected: scope() == RefreshScope::All, "All Sites" }
                    for site in Site::ALL {
                        option {
                            value: "{site.slug()}",
                            selected: scope() == RefreshScope::One(site),
                            "{site}"
                        }
                    }
                }
                button {
                    class: "px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 text-sm font-medium",
                    disabled: progress().is_active(),
                    onclick: move |_| props.on_refresh.call(()),
                    "{button_label}"
                }
            }

            // Refreshed sites summary
            div {
                class: "min-w-64 max-h-24 overflow-y-auto p-2 border border-gray-200 rounded-md text-sm text-gray-700 bg-gray-50",
                if refreshed_sites().is_empty() {
                    p { "No sites refreshed yet" }
                } else {
                    for site in refreshed_sites() {
                        div { key: "{site.slug()}", "\u{2705} {site}" }
                    }
                }
            }
        }
    }
}
