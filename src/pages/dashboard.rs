//! Events dashboard page

use dioxus::prelude::*;

use crate::api;
use crate::components::{
    EventCard, EventFilters, EventTable, EventTableHandle, NewEventCard, RefreshControls,
    SearchInput,
};
use crate::export;
use crate::refresh::{self, RefreshProgress, RefreshScope};
use crate::state::{use_toasts, Site, SortField, SortOrder, TimeFilter, ValidityFilter};
use crate::types::Event;

/// Events dashboard: refresh controls, filterable event table, selected
/// event detail.
#[component]
pub fn Dashboard() -> Element {
    let mut toasts = use_toasts();

    let mut selected_event = use_signal(|| None::<Event>);
    let mut selected_event_id = use_signal(|| None::<i64>);
    let mut refresh_trigger: Signal<u32> = use_signal(|| 0);
    let table = use_hook(EventTableHandle::new);
    let mut show_new_event = use_signal(|| false);

    // Filter states
    let sort_by = use_signal(SortField::default);
    let sort_order = use_signal(SortOrder::default);
    let selected_market = use_signal(|| "all".to_string());
    let selected_industry = use_signal(|| "all".to_string());
    let selected_organizer = use_signal(|| "all".to_string());
    let time_filter = use_signal(TimeFilter::default);
    let validity_filter = use_signal(ValidityFilter::default);

    // Refresh run state
    let refresh_scope = use_signal(RefreshScope::default);
    let mut refresh_progress = use_signal(RefreshProgress::default);
    let mut refreshed_sites = use_signal(Vec::<Site>::new);

    let handle_select_event = move |event: Option<Event>| {
        selected_event_id.set(event.as_ref().map(|event| event.id));
        selected_event.set(event);
    };

    let handle_filter_change = move |_| {
        refresh_trigger.set(refresh_trigger() + 1);
    };

    let handle_event_update = move |_| {
        refresh_trigger.set(refresh_trigger() + 1);
    };

    let handle_event_add = move |_| {
        refresh_trigger.set(refresh_trigger() + 1);
    };

    let handle_event_delete = move |_| {
        selected_event.set(None);
        selected_event_id.set(None);
        refresh_trigger.set(refresh_trigger() + 1);
    };

    let handle_search = move |term: String| {
        let mut table = table;
        table.set_search_term(term);
    };

    // Sequential per-site refresh; aborts on the first failure.
    let handle_refresh = move |_| {
        if refresh_progress.peek().is_active() {
            return;
        }
        refresh_progress.set(RefreshProgress::Starting);
        refreshed_sites.set(Vec::new());
        let scope = *refresh_scope.peek();

        spawn(async move {
            let client = api::client();
            let outcome = refresh::run(
                &scope.sites(),
                |site| {
                    let client = client.clone();
                    async move { client.refresh_site(site).await }
                },
                |current| {
                    refresh_progress.set(match current {
                        Some(site) => RefreshProgress::Site(site),
                        None => RefreshProgress::Idle,
                    });
                },
                |site| {
                    refresh_trigger.set(refresh_trigger() + 1);
                    refreshed_sites.write().push(site);
                },
            )
            .await;

            if let Some(failure) = outcome.failure {
                tracing::warn!(description = failure.description(), "refresh run aborted");
                toasts.error(failure.title(), failure.description());
            }
        });
    };

    let handle_export = move |_| {
        let events = table.rows();
        match export::build_workbook(&events) {
            Ok(Some(bytes)) => {
                let filename = export::export_filename(chrono::Utc::now().date_naive());

                #[cfg(feature = "web")]
                export::download_workbook(&bytes, &filename);

                #[cfg(not(feature = "web"))]
                {
                    let _ = bytes;
                    tracing::debug!(%filename, "export is only available in the browser");
                }
            }
            // Empty row set: diagnostic only, nothing to download.
            Ok(None) => {}
            Err(err) => {
                tracing::error!(%err, "failed to build export workbook");
            }
        }
    };

    rsx! {
        div {
            class: "max-w-full py-8 px-4",

            div {
                class: "flex items-start justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Events Dashboard" }
                RefreshControls {
                    scope: refresh_scope,
                    progress: refresh_progress,
                    refreshed_sites: refreshed_sites,
                    on_refresh: handle_refresh,
                }
            }

            div {
                class: "space-y-6",

                div {
                    class: "border-2 border-gray-200 rounded-md p-4",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Events List" }

                    div {
                        class: "flex items-center gap-3 mb-4",
                        SearchInput { on_search: handle_search }
                        button {
                            class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-md hover:bg-gray-200 text-sm font-medium",
                            onclick: move |_| show_new_event.set(true),
                            "+ New Event"
                        }
                    }

                    EventFilters {
                        sort_by: sort_by,
                        sort_order: sort_order,
                        selected_market: selected_market,
                        selected_industry: selected_industry,
                        selected_organizer: selected_organizer,
                        time_filter: time_filter,
                        validity_filter: validity_filter,
                        on_filter_change: handle_filter_change,
                        on_export: handle_export,
                    }

                    div {
                        class: "border-2 border-gray-200 rounded-md overflow-x-auto max-h-[600px] overflow-y-auto",
                        EventTable {
                            handle: table,
                            on_select_event: handle_select_event,
                            refresh_trigger: refresh_trigger,
                            selected_event_id: selected_event_id,
                            sort_by: sort_by,
                            sort_order: sort_order,
                            selected_market: selected_market,
                            selected_industry: selected_industry,
                            selected_organizer: selected_organizer,
                            time_filter: time_filter,
                            validity_filter: validity_filter,
                        }
                    }
                }

                div {
                    class: "border-2 border-gray-200 rounded-md p-4",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-3", "Selected Event" }
                    if let Some(event) = selected_event() {
                        EventCard {
                            event: event.clone(),
                            on_event_update: handle_event_update,
                            on_event_delete: handle_event_delete,
                        }
                    } else {
                        p { class: "text-gray-500 text-sm", "Select an event to view details." }
                    }
                }
            }

            if show_new_event() {
                NewEventCard {
                    on_event_add: handle_event_add,
                    on_close: move |_| show_new_event.set(false),
                }
            }
        }
    }
}
