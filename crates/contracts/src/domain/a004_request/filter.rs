//! Request list filtering
//!
//! Filters take the raw input strings of the filter panel so the list page
//! can bind them directly. Order of records is always preserved.

use super::aggregate::{RequestRecord, STEP_WAITING_FOR_APPROVE};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// RFC 3339 timestamp, or `yyyy-mm-dd` read as midnight UTC.
pub fn parse_date_input(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFilter {
    pub search_term: String,
    /// Exact status name; empty means any
    pub status: String,
    pub date_from: String,
    pub date_to: String,
}

impl RequestFilter {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of filter inputs currently in effect
    pub fn active_count(&self) -> usize {
        let search = usize::from(!self.search_term.is_empty());
        search
            + [&self.status, &self.date_from, &self.date_to]
                .iter()
                .filter(|s| !s.trim().is_empty())
                .count()
    }

    pub fn matches(&self, record: &RequestRecord) -> bool {
        // substring as typed, whitespace included
        let term = self.search_term.to_lowercase();
        if !term.is_empty() {
            let hit = [&record.id, &record.request_title, &record.step_owner]
                .iter()
                .any(|s| s.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if !self.status.is_empty() && record.status.as_str() != self.status {
            return false;
        }

        if let Some(from) = self.bound(&self.date_from) {
            if record.created_date < from {
                return false;
            }
        }
        if let Some(to) = self.bound(&self.date_to) {
            if record.created_date > to {
                return false;
            }
        }
        true
    }

    /// Unparseable input leaves the bound open
    fn bound(&self, input: &str) -> Option<DateTime<Utc>> {
        let parsed = parse_date_input(input);
        if parsed.is_none() && !input.trim().is_empty() {
            log::warn!("ignoring unparseable date filter '{}'", input);
        }
        parsed
    }

    pub fn apply<'a>(&self, records: &'a [RequestRecord]) -> Vec<&'a RequestRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

pub fn filter_requests(records: Vec<RequestRecord>, filter: &RequestFilter) -> Vec<RequestRecord> {
    records.into_iter().filter(|r| filter.matches(r)).collect()
}

/// Requests currently waiting for an approver
pub fn approval_queue(records: &[RequestRecord]) -> Vec<&RequestRecord> {
    records
        .iter()
        .filter(|r| r.current_steps == STEP_WAITING_FOR_APPROVE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_request::fixtures::requests;
    use crate::domain::a004_request::RequestStatus;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_empty_filter_is_identity() {
        let records = requests();
        let filter = RequestFilter::default();
        assert!(filter.is_empty());
        let out = filter_requests(records.clone(), &filter);
        assert_eq!(out, records);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = requests();
        let filter = RequestFilter {
            search_term: "cust".into(),
            status: "Pending".into(),
            ..Default::default()
        };
        let once = filter_requests(records, &filter);
        let twice = filter_requests(once.clone(), &filter);
        assert_eq!(once, twice);
        assert!(once.iter().all(|r| r.status == RequestStatus::Pending));
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let mut records = requests();
        records.truncate(1);
        let record = &records[0];

        for term in [
            record.id.to_lowercase(),
            record.request_title.to_uppercase(),
            record.step_owner.to_lowercase(),
        ] {
            let filter = RequestFilter {
                search_term: term,
                ..Default::default()
            };
            assert_eq!(filter.apply(&records).len(), 1);
        }

        let filter = RequestFilter {
            search_term: "zzz-nothing".into(),
            ..Default::default()
        };
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_search_keeps_whitespace_in_term() {
        let mut records = requests();
        records.truncate(2);
        records[0].request_title = "a b".into();
        records[1].request_title = "ab".into();
        for r in &mut records {
            r.step_owner = "Owner".into();
        }

        let filter = RequestFilter {
            search_term: " b".into(),
            ..Default::default()
        };
        let hits = filter.apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].request_title, "a b");

        let blank = RequestFilter {
            search_term: " ".into(),
            ..Default::default()
        };
        assert_eq!(blank.apply(&records).len(), 1);
        assert_eq!(blank.active_count(), 1);
    }

    #[test]
    fn test_status_is_exact() {
        let records = requests();
        let filter = RequestFilter {
            status: "pending".into(),
            ..Default::default()
        };
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_date_range_boundaries() {
        let mut records = requests();
        records.truncate(1);
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        records[0].created_date = created;

        let at_bounds = RequestFilter {
            date_from: "2024-01-15".into(),
            date_to: "2024-01-15".into(),
            ..Default::default()
        };
        assert_eq!(at_bounds.apply(&records).len(), 1, "equal bounds are included");

        records[0].created_date = created - Duration::milliseconds(1);
        let from_only = RequestFilter {
            date_from: "2024-01-15".into(),
            ..Default::default()
        };
        assert!(from_only.apply(&records).is_empty(), "1 ms before from is excluded");

        records[0].created_date = created + Duration::milliseconds(1);
        assert!(at_bounds.apply(&records).is_empty(), "date-only upper bound is midnight");
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-01-15"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_date_input("2024-01-15T07:00:00+07:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("15/01/2024"), None);
    }

    #[test]
    fn test_approval_queue() {
        let records = requests();
        let queue = approval_queue(&records);
        assert!(!queue.is_empty());
        assert!(queue.iter().all(|r| r.current_steps == "Waiting for Approve"));
        let expected = records
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .count();
        assert_eq!(queue.len(), expected);
    }
}
