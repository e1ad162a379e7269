//! Type definitions for the events API

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An event record as returned by the query endpoint. The client holds a
/// read-only snapshot per fetch; all writes go through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub organizer: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub event_link: String,
    pub industry: String,
    pub market: String,
    pub attending: i64,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub valid: bool,
}

impl Event {
    /// An event is past once its end time is behind the wall clock.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.end_datetime < now
    }

    /// Rows created within 30 minutes of the most recently created row in the
    /// current result set count as newly added, regardless of wall-clock now.
    pub fn is_newly_added(&self, latest_created_at: DateTime<Utc>) -> bool {
        let window_start = latest_created_at - Duration::minutes(30);
        self.created_at >= window_start && self.created_at <= latest_created_at
    }

    pub fn weekday(&self) -> String {
        self.start_datetime.format("%A").to_string()
    }
}

/// Most recent creation timestamp in a result set.
pub fn latest_created_at(events: &[Event]) -> Option<DateTime<Utc>> {
    events.iter().map(|event| event.created_at).max()
}

/// Payload for creating an event through the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub organizer: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub event_link: String,
    pub industry: String,
    pub market: String,
    pub attending: i64,
}

/// Partial update for an existing event. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Test fixture shared by unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_event(id: i64, created_at: DateTime<Utc>) -> Event {
    use chrono::TimeZone;

    Event {
        id,
        title: format!("Event {id}"),
        organizer: "Chamber of Commerce".to_string(),
        start_datetime: Utc.with_ymd_and_hms(2026, 8, 6, 9, 30, 0).unwrap(),
        end_datetime: Utc.with_ymd_and_hms(2026, 8, 6, 11, 0, 0).unwrap(),
        event_link: "https://example.org/events/networking".to_string(),
        industry: "Finance".to_string(),
        market: "Sarasota".to_string(),
        attending: 42,
        color: None,
        created_at,
        valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_past_flag_compares_end_time_to_now() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let event = sample_event(1, now);
        assert!(event.is_past(now));
        assert!(!event.is_past(Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap()));
    }

    #[test]
    fn test_newly_added_window_is_relative_to_latest_row() {
        let latest = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        let events = [
            sample_event(1, latest - Duration::minutes(45)),
            sample_event(2, latest - Duration::minutes(20)),
            sample_event(3, latest),
        ];

        assert_eq!(latest_created_at(&events), Some(latest));
        assert!(!events[0].is_newly_added(latest));
        assert!(events[1].is_newly_added(latest));
        assert!(events[2].is_newly_added(latest));
    }

    #[test]
    fn test_latest_created_at_empty() {
        assert_eq!(latest_created_at(&[]), None);
    }

    #[test]
    fn test_event_deserializes_backend_json() {
        let json = r##"{
            "id": 17,
            "title": "Quarterly Mixer",
            "organizer": "Tech Council",
            "start_datetime": "2026-08-06T17:30:00Z",
            "end_datetime": "2026-08-06T19:00:00Z",
            "event_link": "https://example.org/events/quarterly-mixer",
            "industry": "Technology",
            "market": "Tampa",
            "attending": 120,
            "color": "#3366ff",
            "created_at": "2026-08-01T08:00:00Z",
            "valid": true
        }"##;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 17);
        assert_eq!(event.color.as_deref(), Some("#3366ff"));
        assert_eq!(event.weekday(), "Thursday");
    }
}
