//! Sort and filter controls for the event list

use dioxus::prelude::*;

use crate::state::{SortField, SortOrder, TimeFilter, ValidityFilter, INDUSTRIES, MARKETS, ORGANIZERS};

#[derive(Props, Clone, PartialEq)]
pub struct EventFiltersProps {
    pub sort_by: Signal<SortField>,
    pub sort_order: Signal<SortOrder>,
    pub selected_market: Signal<String>,
    pub selected_industry: Signal<String>,
    pub selected_organizer: Signal<String>,
    pub time_filter: Signal<TimeFilter>,
    pub validity_filter: Signal<ValidityFilter>,
    pub on_filter_change: EventHandler<()>,
    pub on_export: EventHandler<()>,
}

/// Filter bar above the event table
#[component]
pub fn EventFilters(props: EventFiltersProps) -> Element {
    let mut sort_by = props.sort_by;
    let mut sort_order = props.sort_order;
    let mut selected_market = props.selected_market;
    let mut selected_industry = props.selected_industry;
    let mut selected_organizer = props.selected_organizer;
    let mut time_filter = props.time_filter;
    let mut validity_filter = props.validity_filter;
    let on_filter_change = props.on_filter_change;

    rsx! {
        div {
            class: "flex items-end gap-4 flex-wrap mb-4",

            div {
                p { class: "text-sm mb-1", "Sort by" }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                    onchange: move |e| {
                        if let Some(field) = SortField::parse(&e.value()) {
                            sort_by.set(field);
                            on_filter_change.call(());
                        }
                    },
                    for field in SortField::ALL {
                        option {
                            value: "{field.as_str()}",
                            selected: sort_by() == field,
                            "{field.label()}"
                        }
                    }
                }
            }

            div {
                p { class: "text-sm mb-1", "Order" }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                    onchange: move |e| {
                        if let Some(order) = SortOrder::parse(&e.value()) {
                            sort_order.set(order);
                            on_filter_change.call(());
                        }
                    },
                    for order in SortOrder::ALL {
                        option {
                            value: "{order.as_str()}",
                            selected: sort_order() == order,
                            "{order.label()}"
                        }
                    }
                }
            }

            div {
                p { class: "text-sm mb-1", "Market" }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                    onchange: move |e| {
                        selected_market.set(e.value());
                        on_filter_change.call(());
                    },
                    option { value: "all", selected: selected_market() == "all", "All Markets" }
                    for market in MARKETS {
                        option {
                            value: "{market}",
                            selected: selected_market() == market,
                            "{market}"
                        }
                    }
                }
            }

            div {
                p { class: "text-sm mb-1", "Industry" }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                    onchange: move |e| {
                        selected_industry.set(e.value());
                        on_filter_change.call(());
                    },
                    option { value: "all", selected: selected_industry() == "all", "All Industries" }
                    for industry in INDUSTRIES {
                        option {
                            value: "{industry}",
                            selected: selected_industry() == industry,
                            "{industry}"
                        }
                    }
                }
            }

            div {
                p { class: "text-sm mb-1", "Organizer" }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                    onchange: move |e| {
                        selected_organizer.set(e.value());
                        on_filter_change.call(());
                    },
                    option { value: "all", selected: selected_organizer() == "all", "All Organizers" }
                    for organizer in ORGANIZERS {
                        option {
                            value: "{organizer}",
                            selected: selected_organizer() == organizer,
                            "{organizer}"
                        }
                    }
                }
            }

            div {
                p { class: "text-sm mb-1", "Event Time" }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                    onchange: move |e| {
                        if let Some(filter) = TimeFilter::parse(&e.value()) {
                            time_filter.set(filter);
                        }
                    },
                    for filter in TimeFilter::ALL {
                        option {
                            value: "{filter.as_str()}",
                            selected: time_filter() == filter,
                            "{filter.label()}"
                        }
                    }
                }
            }

            div {
                p { class: "text-sm mb-1", "Validity" }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm",
                    onchange: move |e| {
                        if let Some(filter) = ValidityFilter::parse(&e.value()) {
                            validity_filter.set(filter);
                        }
                    },
                    for filter in ValidityFilter::ALL {
                        option {
                            value: "{filter.as_str()}",
                            selected: validity_filter() == filter,
                            "{filter.label()}"
                        }
                    }
                }
            }

            div {
                p { class: "text-sm mb-1", "Export Excel" }
                button {
                    class: "px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 text-sm font-medium",
                    onclick: move |_| props.on_export.call(()),
                    "Export"
                }
            }
        }
    }
}
