//! Event list table: query-driven rows with derived display flags

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::api::{self, category_selection, EventQuery, EVENT_FILTER_TOKEN};
use crate::state::{SortField, SortOrder, TimeFilter, ValidityFilter};
use crate::types::{latest_created_at, Event};

use super::LoadingSpinner;

/// Keystroke coalescing window before the search text is applied.
#[cfg(feature = "web")]
const SEARCH_DEBOUNCE_MS: u32 = 200;

/// Alpha applied to row highlight colors.
const ROW_COLOR_ALPHA: f32 = 0.66;

/// Background of the selected row, before transparency.
const SELECTED_ROW_COLOR: &str = "#bee3f8";

/// Capability handle the page holds on the table: set the search text
/// programmatically and read the currently loaded row snapshot.
#[derive(Clone, Copy, PartialEq)]
pub struct EventTableHandle {
    search: Signal<String>,
    rows: Signal<Vec<Event>>,
}

impl EventTableHandle {
    pub fn new() -> Self {
        Self {
            search: Signal::new(String::new()),
            rows: Signal::new(Vec::new()),
        }
    }

    /// Set the search text; the table applies its debounce before querying.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search.set(term.into());
    }

    /// Snapshot of the currently loaded rows.
    pub fn rows(&self) -> Vec<Event> {
        self.rows.peek().clone()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct EventTableProps {
    pub handle: EventTableHandle,
    pub on_select_event: EventHandler<Option<Event>>,
    pub refresh_trigger: ReadOnlySignal<u32>,
    pub selected_event_id: ReadOnlySignal<Option<i64>>,
    pub sort_by: ReadOnlySignal<SortField>,
    pub sort_order: ReadOnlySignal<SortOrder>,
    pub selected_market: ReadOnlySignal<String>,
    pub selected_industry: ReadOnlySignal<String>,
    pub selected_organizer: ReadOnlySignal<String>,
    pub time_filter: ReadOnlySignal<TimeFilter>,
    pub validity_filter: ReadOnlySignal<ValidityFilter>,
}

/// Event table. Re-fetches from the query endpoint whenever any filter,
/// the debounced search text, or the refresh counter changes, replacing the
/// displayed rows wholesale.
#[component]
pub fn EventTable(props: EventTableProps) -> Element {
    let search = props.handle.search;
    let mut table_rows = props.handle.rows;
    let on_select_event = props.on_select_event;
    let refresh_trigger = props.refresh_trigger;
    let selected_event_id = props.selected_event_id;
    let sort_by = props.sort_by;
    let sort_order = props.sort_order;
    let selected_market = props.selected_market;
    let selected_industry = props.selected_industry;
    let selected_organizer = props.selected_organizer;
    let time_filter = props.time_filter;
    let validity_filter = props.validity_filter;

    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut latest_created = use_signal(|| None::<DateTime<Utc>>);
    let mut debounced_search = use_signal(String::new);
    let mut debounce_gen: Signal<u32> = use_signal(|| 0);
    let mut fetch_seq: Signal<u32> = use_signal(|| 0);

    // Debounce the raw search text: each keystroke reschedules the window,
    // only the latest one commits.
    use_effect(move || {
        let term = search();
        let generation = debounce_gen.peek().wrapping_add(1);
        debounce_gen.set(generation);

        spawn(async move {
            #[cfg(feature = "web")]
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;

            if *debounce_gen.peek() != generation {
                return;
            }
            if *debounced_search.peek() != term {
                debounced_search.set(term);
            }
        });
    });

    // Fetch whenever any query input changes.
    use_effect(move || {
        let query = EventQuery {
            search: debounced_search(),
            sort_by: sort_by(),
            sort_order: sort_order(),
            filter: EVENT_FILTER_TOKEN.to_string(),
            market: category_selection(&selected_market()),
            industry: category_selection(&selected_industry()),
            organizer: category_selection(&selected_organizer()),
            time_filter: time_filter(),
            validity: validity_filter(),
        };
        let _ = refresh_trigger();

        let seq = fetch_seq.peek().wrapping_add(1);
        fetch_seq.set(seq);

        spawn(async move {
            loading.set(true);
            let result = api::client().fetch_events(&query).await;

            // A newer query superseded this request; drop the stale response.
            if *fetch_seq.peek() != seq {
                return;
            }

            match result {
                Ok(events) => {
                    latest_created.set(latest_created_at(&events));
                    // Copy the id out before calling back: the handler may
                    // write the selection signal we are reading.
                    let selected = *selected_event_id.peek();
                    if let Some(change) = reconcile_selection(&events, selected) {
                        on_select_event.call(change);
                    }
                    table_rows.set(events);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!(%err, "failed to load events");
                    error.set(Some("Error loading events".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let handle_row_select = move |event: Event| {
        // Only push the selection outward when it actually changed.
        let selected = *selected_event_id.peek();
        if selected != Some(event.id) {
            on_select_event.call(Some(event));
        }
    };

    rsx! {
        div {
            if let Some(err) = error() {
                p { class: "text-red-600 text-sm mb-2", "{err}" }
            }
            if loading() {
                LoadingSpinner {}
            }

            table {
                class: "min-w-full divide-y divide-gray-200 text-sm",
                thead {
                    class: "bg-gray-50",
                    tr {
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "Weekday" }
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "Start Date/Time" }
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "End Date/Time" }
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "Organizer" }
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "Title" }
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "Link" }
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "Industry" }
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "Market" }
                        th { class: "px-4 py-3 text-left text-xs font-bold text-gray-600", "Attending" }
                    }
                }
                tbody {
                    class: "bg-white divide-y divide-gray-200",
                    for event in table_rows() {
                        EventRow {
                            key: "{event.id}",
                            selected: *selected_event_id.read() == Some(event.id),
                            latest_created_at: latest_created(),
                            on_select: handle_row_select,
                            event: event.clone(),
                        }
                    }
                }
            }

            if !loading() && table_rows().is_empty() {
                p { class: "text-center text-gray-500 py-8", "No events found." }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct EventRowProps {
    event: Event,
    selected: bool,
    latest_created_at: Option<DateTime<Utc>>,
    on_select: EventHandler<Event>,
}

#[component]
fn EventRow(props: EventRowProps) -> Element {
    let event = &props.event;
    let is_past = event.is_past(Utc::now());
    let is_new = props
        .latest_created_at
        .is_some_and(|latest| event.is_newly_added(latest));
    let background = row_background(event, props.selected);
    let weight = if props.selected { "font-bold" } else { "font-normal" };

    rsx! {
        tr {
            class: "cursor-pointer hover:bg-gray-100 {weight}",
            style: "background-color: {background}",
            onclick: {
                let event = props.event.clone();
                move |_| props.on_select.call(event.clone())
            },
            td { class: "px-4 py-2 align-top", "{event.weekday()}" }
            td { class: "px-4 py-2 align-top", "{format_datetime(&event.start_datetime)}" }
            td { class: "px-4 py-2 align-top", "{format_datetime(&event.end_datetime)}" }
            td { class: "px-4 py-2 align-top", "{event.organizer}" }
            td {
                class: "px-4 py-2 align-top",
                "{event.title}"
                if is_past {
                    span { class: "ml-2 font-bold text-gray-500", "[Passed]" }
                }
                if is_new {
                    span { class: "ml-2 font-bold text-orange-500", "[New]" }
                }
            }
            td {
                class: "px-4 py-2 align-top",
                a {
                    href: "{event.event_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "text-blue-600 hover:text-blue-700",
                    "Link"
                }
            }
            td { class: "px-4 py-2 align-top", "{event.industry}" }
            td { class: "px-4 py-2 align-top", "{event.market}" }
            td { class: "px-4 py-2 align-top", "{event.attending}" }
        }
    }
}

fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%m/%d/%Y %H:%M").to_string()
}

fn row_background(event: &Event, selected: bool) -> String {
    if selected {
        return add_transparency(SELECTED_ROW_COLOR, ROW_COLOR_ALPHA);
    }
    if let Some(color) = &event.color {
        return add_transparency(color, ROW_COLOR_ALPHA);
    }
    "transparent".to_string()
}

/// Blend a `#rrggbb` color with the given alpha. Anything else is passed
/// through untouched.
fn add_transparency(color: &str, alpha: f32) -> String {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return format!("rgba({r}, {g}, {b}, {alpha})");
            }
        }
    }
    color.to_string()
}

/// Reconcile the externally tracked selection against a fresh result set.
/// Returns the selection change to push outward, or `None` when the caller's
/// selection is already correct.
fn reconcile_selection(events: &[Event], selected_id: Option<i64>) -> Option<Option<Event>> {
    if events.is_empty() {
        return if selected_id.is_some() { Some(None) } else { None };
    }

    let selected_present =
        selected_id.is_some_and(|id| events.iter().any(|event| event.id == id));
    if selected_present {
        None
    } else {
        Some(Some(events[0].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sample_event;
    use chrono::TimeZone;

    fn events(ids: &[i64]) -> Vec<Event> {
        let created = Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap();
        ids.iter().map(|&id| sample_event(id, created)).collect()
    }

    #[test]
    fn test_absent_selection_moves_to_first_row() {
        let rows = events(&[4, 5, 6]);
        let change = reconcile_selection(&rows, Some(99)).expect("selection must change");
        assert_eq!(change.map(|event| event.id), Some(4));
    }

    #[test]
    fn test_no_selection_picks_first_row() {
        let rows = events(&[4, 5]);
        let change = reconcile_selection(&rows, None).expect("selection must change");
        assert_eq!(change.map(|event| event.id), Some(4));
    }

    #[test]
    fn test_present_selection_is_left_alone() {
        let rows = events(&[4, 5, 6]);
        assert_eq!(reconcile_selection(&rows, Some(5)), None);
    }

    #[test]
    fn test_empty_result_clears_an_existing_selection() {
        assert_eq!(reconcile_selection(&[], Some(4)), Some(None));
        assert_eq!(reconcile_selection(&[], None), None);
    }

    #[test]
    fn test_add_transparency_blends_hex_colors() {
        assert_eq!(add_transparency("#3366ff", 0.66), "rgba(51, 102, 255, 0.66)");
        assert_eq!(add_transparency("#000000", 0.66), "rgba(0, 0, 0, 0.66)");
    }

    #[test]
    fn test_add_transparency_passes_through_non_hex() {
        assert_eq!(add_transparency("transparent", 0.66), "transparent");
        assert_eq!(add_transparency("#abc", 0.66), "#abc");
    }
}
