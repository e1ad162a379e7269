//! Client-side state: site registry, filter criteria, notifications

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// A partner site events are scraped from. Refreshing a site re-synchronizes
/// its events into the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    ChamberOfCommerce,
    CommercialAlliance,
    DowntownPartnership,
    TechCouncil,
    RealtorsBoard,
}

impl Site {
    /// Every known site, in refresh enumeration order.
    pub const ALL: [Site; 5] = [
        Site::ChamberOfCommerce,
        Site::CommercialAlliance,
        Site::DowntownPartnership,
        Site::TechCouncil,
        Site::RealtorsBoard,
    ];

    /// Stable identifier used in the refresh request payload and form values.
    pub fn slug(&self) -> &'static str {
        match self {
            Site::ChamberOfCommerce => "chamber_of_commerce",
            Site::CommercialAlliance => "commercial_alliance",
            Site::DowntownPartnership => "downtown_partnership",
            Site::TechCouncil => "tech_council",
            Site::RealtorsBoard => "realtors_board",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Site::ChamberOfCommerce => "Chamber of Commerce",
            Site::CommercialAlliance => "Commercial Alliance",
            Site::DowntownPartnership => "Downtown Partnership",
            Site::TechCouncil => "Tech Council",
            Site::RealtorsBoard => "Realtors Board",
        }
    }

    pub fn parse(value: &str) -> Option<Site> {
        Site::ALL.into_iter().find(|site| site.slug() == value)
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sortable event columns, encoded as the backend's `sort_by` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    StartDatetime,
    EndDatetime,
    CreatedAt,
    Organizer,
    Title,
    Industry,
    Market,
    Attending,
    Color,
}

impl SortField {
    pub const ALL: [SortField; 9] = [
        SortField::StartDatetime,
        SortField::EndDatetime,
        SortField::CreatedAt,
        SortField::Organizer,
        SortField::Title,
        SortField::Industry,
        SortField::Market,
        SortField::Attending,
        SortField::Color,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::StartDatetime => "start_datetime",
            SortField::EndDatetime => "end_datetime",
            SortField::CreatedAt => "created_at",
            SortField::Organizer => "organizer",
            SortField::Title => "title",
            SortField::Industry => "industry",
            SortField::Market => "market",
            SortField::Attending => "attending",
            SortField::Color => "color",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::StartDatetime => "Start Date/Time",
            SortField::EndDatetime => "End Date/Time",
            SortField::CreatedAt => "Created Date/Time",
            SortField::Organizer => "Organizer",
            SortField::Title => "Title",
            SortField::Industry => "Industry",
            SortField::Market => "Market",
            SortField::Attending => "Attending",
            SortField::Color => "Color",
        }
    }

    pub fn parse(value: &str) -> Option<SortField> {
        SortField::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }

    pub fn parse(value: &str) -> Option<SortOrder> {
        SortOrder::ALL.into_iter().find(|order| order.as_str() == value)
    }
}

/// Time-window filter over event start times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 3] = [TimeFilter::All, TimeFilter::Upcoming, TimeFilter::Past];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::All => "all-events",
            TimeFilter::Upcoming => "upcoming-events",
            TimeFilter::Past => "past-events",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::All => "All Events",
            TimeFilter::Upcoming => "Upcoming Events",
            TimeFilter::Past => "Past Events",
        }
    }

    pub fn parse(value: &str) -> Option<TimeFilter> {
        TimeFilter::ALL.into_iter().find(|filter| filter.as_str() == value)
    }
}

/// Validity filter over the server-assigned `valid` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ValidityFilter {
    All,
    #[default]
    Valid,
    Invalid,
}

impl ValidityFilter {
    pub const ALL: [ValidityFilter; 3] = [
        ValidityFilter::All,
        ValidityFilter::Valid,
        ValidityFilter::Invalid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidityFilter::All => "all",
            ValidityFilter::Valid => "valid",
            ValidityFilter::Invalid => "invalid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValidityFilter::All => "All Events",
            ValidityFilter::Valid => "Valid Events",
            ValidityFilter::Invalid => "Invalid Events",
        }
    }

    pub fn parse(value: &str) -> Option<ValidityFilter> {
        ValidityFilter::ALL.into_iter().find(|filter| filter.as_str() == value)
    }
}

/// Dropdown choices for the market filter.
pub const MARKETS: [&str; 4] = ["Sarasota", "Manatee", "Tampa", "Orlando"];

/// Dropdown choices for the industry filter.
pub const INDUSTRIES: [&str; 5] = [
    "Commercial Real Estate",
    "Construction",
    "Finance",
    "Hospitality",
    "Technology",
];

/// Dropdown choices for the organizer filter.
pub const ORGANIZERS: [&str; 5] = [
    "Chamber of Commerce",
    "Commercial Alliance",
    "Downtown Partnership",
    "Tech Council",
    "Realtors Board",
];

/// How long an error notification stays on screen.
#[cfg(feature = "web")]
const TOAST_DISMISS_MS: u32 = 6000;

/// A transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Notification state, provided to the whole app through context.
#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Show an error notification. Auto-dismissed in the browser.
    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            title: title.into(),
            description: description.into(),
        });

        #[cfg(feature = "web")]
        {
            let mut toasts = self.toasts;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                toasts.write().retain(|toast| toast.id != id);
            });
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }
}

/// Hook to access the notification state
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_slug_round_trip() {
        for site in Site::ALL {
            assert_eq!(Site::parse(site.slug()), Some(site));
        }
        assert_eq!(Site::parse("all"), None);
    }

    #[test]
    fn test_site_wire_format_matches_slug() {
        for site in Site::ALL {
            let wire = serde_json::to_string(&site).unwrap();
            assert_eq!(wire, format!("\"{}\"", site.slug()));
        }
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(SortField::parse("created_at"), Some(SortField::CreatedAt));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(TimeFilter::parse("upcoming-events"), Some(TimeFilter::Upcoming));
        assert_eq!(ValidityFilter::parse("invalid"), Some(ValidityFilter::Invalid));
        assert_eq!(SortField::parse("bogus"), None);
    }
}
