//! Detail card for the selected event

use dioxus::prelude::*;

use crate::api;
use crate::state::use_toasts;
use crate::types::{Event, EventUpdate};

#[derive(Props, Clone, PartialEq)]
pub struct EventCardProps {
    pub event: Event,
    pub on_event_update: EventHandler<()>,
    pub on_event_delete: EventHandler<()>,
}

/// Read-only view of one event with validity toggle, color override and
/// delete.
#[component]
pub fn EventCard(props: EventCardProps) -> Element {
    let mut toasts = use_toasts();
    let mut is_busy = use_signal(|| false);

    let event = &props.event;
    let event_id = event.id;
    let valid = event.valid;
    let starts = event.start_datetime.format("%m/%d/%Y %H:%M").to_string();
    let ends = event.end_datetime.format("%m/%d/%Y %H:%M").to_string();
    let color_value = event.color.clone().unwrap_or_else(|| "#ffffff".to_string());

    let handle_toggle_valid = move |_| {
        let on_event_update = props.on_event_update;
        spawn(async move {
            is_busy.set(true);
            let update = EventUpdate {
                valid: Some(!valid),
                ..EventUpdate::default()
            };
            match api::client().update_event(event_id, &update).await {
                Ok(()) => on_event_update.call(()),
                Err(err) => toasts.error("Failed to update event", err.to_string()),
            }
            is_busy.set(false);
        });
    };

    let handle_color_change = move |e: FormEvent| {
        let on_event_update = props.on_event_update;
        let color = e.value();
        spawn(async move {
            let update = EventUpdate {
                color: Some(color),
                ..EventUpdate::default()
            };
            match api::client().update_event(event_id, &update).await {
                Ok(()) => on_event_update.call(()),
                Err(err) => toasts.error("Failed to update event", err.to_string()),
            }
        });
    };

    let handle_delete = move |_| {
        let on_event_delete = props.on_event_delete;
        spawn(async move {
            is_busy.set(true);
            match api::client().delete_event(event_id).await {
                Ok(()) => on_event_delete.call(()),
                Err(err) => toasts.error("Failed to delete event", err.to_string()),
            }
            is_busy.set(false);
        });
    };

    rsx! {
        div {
            class: "bg-white border border-gray-200 rounded-lg p-6",

            div {
                class: "flex items-start justify-between mb-4",
                div {
                    h3 { class: "text-lg font-semibold text-gray-900", "{event.title}" }
                    p { class: "text-sm text-gray-500", "{event.organizer}" }
                }
                span {
                    class: if valid {
                        "px-2 py-1 rounded text-xs font-medium bg-green-100 text-green-700"
                    } else {
                        "px-2 py-1 rounded text-xs font-medium bg-red-100 text-red-700"
                    },
                    if valid { "Valid" } else { "Invalid" }
                }
            }

            div {
                class: "grid grid-cols-2 gap-x-6 gap-y-2 text-sm text-gray-700 mb-4",
                p { "Starts: {starts}" }
                p { "Ends: {ends}" }
                p { "Industry: {event.industry}" }
                p { "Market: {event.market}" }
                p { "Attending: {event.attending}" }
                p {
                    a {
                        href: "{event.event_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "text-blue-600 hover:text-blue-700",
                        "Event page"
                    }
                }
            }

            div {
                class: "flex items-center gap-3",
                button {
                    class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200 disabled:opacity-50",
                    disabled: is_busy(),
                    onclick: handle_toggle_valid,
                    if valid { "Mark invalid" } else { "Mark valid" }
                }
                label {
                    class: "flex items-center gap-2 text-sm text-gray-600",
                    "Highlight"
                    input {
                        r#type: "color",
                        value: "{color_value}",
                        onchange: handle_color_change,
                    }
                }
                button {
                    class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200 disabled:opacity-50",
                    disabled: is_busy(),
                    onclick: handle_delete,
                    "Delete"
                }
            }
        }
    }
}
