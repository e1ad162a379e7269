//! Query criteria for the event list endpoint

use chrono::{DateTime, SecondsFormat, Utc};

use crate::state::{SortField, SortOrder, TimeFilter, ValidityFilter};

/// Extra filter token the query endpoint expects on every request.
pub const EVENT_FILTER_TOKEN: &str = "all";

/// Turn a dropdown selection into an optional constraint; "all" means
/// the constraint is omitted entirely.
pub fn category_selection(value: &str) -> Option<String> {
    if value.is_empty() || value == "all" {
        None
    } else {
        Some(value.to_string())
    }
}

/// The full set of criteria sent to the event query endpoint. Built fresh
/// from client state on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub search: String,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub filter: String,
    pub market: Option<String>,
    pub industry: Option<String>,
    pub organizer: Option<String>,
    pub time_filter: TimeFilter,
    pub validity: ValidityFilter,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            filter: EVENT_FILTER_TOKEN.to_string(),
            market: None,
            industry: None,
            organizer: None,
            time_filter: TimeFilter::default(),
            validity: ValidityFilter::default(),
        }
    }
}

impl EventQuery {
    /// Encode the criteria as request parameters. `now` anchors the
    /// upcoming/past start-time bounds.
    pub fn params(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("search", self.search.clone()),
            ("sort_by", self.sort_by.as_str().to_string()),
            ("sort_order", self.sort_order.as_str().to_string()),
            ("filter", self.filter.clone()),
        ];

        match self.validity {
            ValidityFilter::Valid => params.push(("valid", "true".to_string())),
            ValidityFilter::Invalid => params.push(("valid", "false".to_string())),
            ValidityFilter::All => {}
        }

        if let Some(market) = &self.market {
            params.push(("market", market.clone()));
        }
        if let Some(industry) = &self.industry {
            params.push(("industry", industry.clone()));
        }
        if let Some(organizer) = &self.organizer {
            params.push(("organizer", organizer.clone()));
        }

        match self.time_filter {
            TimeFilter::Upcoming => params.push((
                "start_after",
                now.to_rfc3339_opts(SecondsFormat::Millis, true),
            )),
            TimeFilter::Past => params.push((
                "start_before",
                now.to_rfc3339_opts(SecondsFormat::Millis, true),
            )),
            TimeFilter::All => {}
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    fn param_map(query: &EventQuery) -> HashMap<&'static str, String> {
        query.params(now()).into_iter().collect()
    }

    #[test]
    fn test_default_query_params() {
        let params = param_map(&EventQuery::default());

        assert_eq!(params.get("search"), Some(&String::new()));
        assert_eq!(params.get("sort_by"), Some(&"start_datetime".to_string()));
        assert_eq!(params.get("sort_order"), Some(&"asc".to_string()));
        assert_eq!(params.get("filter"), Some(&"all".to_string()));
        assert_eq!(params.get("valid"), Some(&"true".to_string()));
        assert!(!params.contains_key("market"));
        assert!(!params.contains_key("industry"));
        assert!(!params.contains_key("organizer"));
        assert!(!params.contains_key("start_after"));
        assert!(!params.contains_key("start_before"));
    }

    #[test]
    fn test_validity_modes() {
        let mut query = EventQuery::default();

        query.validity = ValidityFilter::All;
        assert!(!param_map(&query).contains_key("valid"));

        query.validity = ValidityFilter::Invalid;
        assert_eq!(param_map(&query).get("valid"), Some(&"false".to_string()));
    }

    #[test]
    fn test_time_window_bounds() {
        let mut query = EventQuery::default();

        query.time_filter = TimeFilter::Upcoming;
        let params = param_map(&query);
        assert_eq!(
            params.get("start_after"),
            Some(&"2026-08-06T12:00:00.000Z".to_string())
        );
        assert!(!params.contains_key("start_before"));

        query.time_filter = TimeFilter::Past;
        let params = param_map(&query);
        assert_eq!(
            params.get("start_before"),
            Some(&"2026-08-06T12:00:00.000Z".to_string())
        );
        assert!(!params.contains_key("start_after"));
    }

    #[test]
    fn test_category_selection_omits_all() {
        assert_eq!(category_selection("all"), None);
        assert_eq!(category_selection(""), None);
        assert_eq!(category_selection("Sarasota"), Some("Sarasota".to_string()));
    }

    #[test]
    fn test_changing_one_filter_changes_exactly_one_param() {
        let base = param_map(&EventQuery::default());

        let mut query = EventQuery::default();
        query.market = Some("Tampa".to_string());
        let changed = param_map(&query);

        assert_eq!(changed.get("market"), Some(&"Tampa".to_string()));
        for (key, value) in &base {
            assert_eq!(changed.get(key), Some(value), "unrelated param {key} moved");
        }
        assert_eq!(changed.len(), base.len() + 1);
    }
}
