//! Dialog form for manually adding an event

use chrono::{DateTime, NaiveDateTime, Utc};
use dioxus::prelude::*;

use crate::api;
use crate::state::{use_toasts, INDUSTRIES, MARKETS, ORGANIZERS};
use crate::types::EventDraft;

#[derive(Props, Clone, PartialEq)]
pub struct NewEventCardProps {
    pub on_event_add: EventHandler<()>,
    pub on_close: EventHandler<()>,
}

/// Modal dialog that creates an event through the API.
#[component]
pub fn NewEventCard(props: NewEventCardProps) -> Element {
    let mut toasts = use_toasts();

    let mut title = use_signal(String::new);
    let mut organizer = use_signal(|| ORGANIZERS[0].to_string());
    let mut industry = use_signal(|| INDUSTRIES[0].to_string());
    let mut market = use_signal(|| MARKETS[0].to_string());
    let mut start_value = use_signal(String::new);
    let mut end_value = use_signal(String::new);
    let mut event_link = use_signal(String::new);
    let mut attending_value = use_signal(|| "0".to_string());
    let mut is_saving = use_signal(|| false);

    let handle_submit = move |_| {
        let on_event_add = props.on_event_add;
        let on_close = props.on_close;

        let Some(start_datetime) = parse_local_datetime(&start_value()) else {
            toasts.error("Invalid start time", "Enter a start date and time");
            return;
        };
        let Some(end_datetime) = parse_local_datetime(&end_value()) else {
            toasts.error("Invalid end time", "Enter an end date and time");
            return;
        };

        let draft = EventDraft {
            title: title().trim().to_string(),
            organizer: organizer(),
            start_datetime,
            end_datetime,
            event_link: event_link().trim().to_string(),
            industry: industry(),
            market: market(),
            attending: attending_value().parse().unwrap_or(0),
        };

        spawn(async move {
            is_saving.set(true);
            match api::client().create_event(&draft).await {
                Ok(()) => {
                    on_event_add.call(());
                    on_close.call(());
                }
                Err(err) => toasts.error("Failed to create event", err.to_string()),
            }
            is_saving.set(false);
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/40 flex items-center justify-center z-40",
            div {
                class: "bg-white rounded-lg shadow-xl w-full max-w-lg p-6",

                div {
                    class: "flex items-center justify-between mb-4",
                    h2 { class: "text-lg font-semibold text-gray-900", "Add New Event" }
                    button {
                        class: "text-gray-400 hover:text-gray-600",
                        onclick: move |_| props.on_close.call(()),
                        "\u{2715}"
                    }
                }

                form {
                    class: "space-y-3",
                    onsubmit: handle_submit,

                    div {
                        p { class: "text-sm mb-1", "Title" }
                        input {
                            r#type: "text",
                            value: "{title}",
                            oninput: move |e| title.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        }
                    }

                    div {
                        class: "grid grid-cols-2 gap-3",
                        div {
                            p { class: "text-sm mb-1", "Starts" }
                            input {
                                r#type: "datetime-local",
                                value: "{start_value}",
                                oninput: move |e| start_value.set(e.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                            }
                        }
                        div {
                            p { class: "text-sm mb-1", "Ends" }
                            input {
                                r#type: "datetime-local",
                                value: "{end_value}",
                                oninput: move |e| end_value.set(e.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-3 gap-3",
                        div {
                            p { class: "text-sm mb-1", "Organizer" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md text-sm",
                                onchange: move |e| organizer.set(e.value()),
                                for option_value in ORGANIZERS {
                                    option {
                                        value: "{option_value}",
                                        selected: organizer() == option_value,
                                        "{option_value}"
                                    }
                                }
                            }
                        }
                        div {
                            p { class: "text-sm mb-1", "Industry" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md text-sm",
                                onchange: move |e| industry.set(e.value()),
                                for option_value in INDUSTRIES {
                                    option {
                                        value: "{option_value}",
                                        selected: industry() == option_value,
                                        "{option_value}"
                                    }
                                }
                            }
                        }
                        div {
                            p { class: "text-sm mb-1", "Market" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md text-sm",
                                onchange: move |e| market.set(e.value()),
                                for option_value in MARKETS {
                                    option {
                                        value: "{option_value}",
                                        selected: market() == option_value,
                                        "{option_value}"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-2 gap-3",
                        div {
                            p { class: "text-sm mb-1", "Event link" }
                            input {
                                r#type: "url",
                                value: "{event_link}",
                                oninput: move |e| event_link.set(e.value()),
                                placeholder: "https://",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                            }
                        }
                        div {
                            p { class: "text-sm mb-1", "Attending" }
                            input {
                                r#type: "number",
                                min: "0",
                                value: "{attending_value}",
                                oninput: move |e| attending_value.set(e.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 text-sm font-medium",
                        disabled: is_saving() || title().trim().is_empty(),
                        if is_saving() { "Saving..." } else { "Add Event" }
                    }
                }
            }
        }
    }
}

/// Parse the value of a `datetime-local` input. Treated as UTC; the backend
/// stores timestamps without an offset.
fn parse_local_datetime(value: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Some(naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_datetime_local_values() {
        assert_eq!(
            parse_local_datetime("2026-08-06T18:00"),
            Some(Utc.with_ymd_and_hms(2026, 8, 6, 18, 0, 0).unwrap())
        );
        assert_eq!(
            parse_local_datetime("2026-08-06T18:00:30"),
            Some(Utc.with_ymd_and_hms(2026, 8, 6, 18, 0, 30).unwrap())
        );
        assert_eq!(parse_local_datetime(""), None);
        assert_eq!(parse_local_datetime("yesterday"), None);
    }
}
