//! Complaint feed filtering.
//!
//! Mirrors the feed filter bar: a free-text query over title and
//! description plus equality filters on category, status and priority.
//! All set filters must match.

use crate::complaint::{Category, Complaint, Priority, Status};
use serde::{Deserialize, Serialize};

/// Conjunctive feed filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl FeedFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether a single complaint passes the filter.
    pub fn matches(&self, complaint: &Complaint) -> bool {
        if let Some(q) = &self.query {
            let haystack =
                format!("{} {}", complaint.title, complaint.description).to_lowercase();
            if !haystack.contains(&q.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = self.category {
            if complaint.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if complaint.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if complaint.priority != priority {
                return false;
            }
        }
        true
    }

    /// Filter a collection, preserving order.
    pub fn apply(&self, complaints: &[Complaint]) -> Vec<Complaint> {
        complaints
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_complaints;
    use chrono::Utc;

    #[test]
    fn test_empty_filter_matches_everything() {
        let complaints = sample_complaints(Utc::now());
        assert_eq!(FeedFilter::default().apply(&complaints), complaints);
    }

    #[test]
    fn test_query_is_case_insensitive_over_title_and_description() {
        let complaints = sample_complaints(Utc::now());
        let hits = FeedFilter::default().with_query("GARBAGE").apply(&complaints);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c2");

        // "traffic" appears only in c1's description.
        let hits = FeedFilter::default().with_query("traffic").apply(&complaints);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c1");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let complaints = sample_complaints(Utc::now());
        let filter = FeedFilter::default()
            .with_category(Category::Water)
            .with_priority(Priority::High);
        let hits = filter.apply(&complaints);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c4");

        // Same category, wrong priority: nothing.
        let filter = FeedFilter::default()
            .with_category(Category::Water)
            .with_priority(Priority::Low);
        assert!(filter.apply(&complaints).is_empty());
    }

    #[test]
    fn test_status_filter() {
        let complaints = sample_complaints(Utc::now());
        let hits = FeedFilter::default()
            .with_status(Status::InProgress)
            .apply(&complaints);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c3");
    }
}
