//! Dashboard and report aggregates over a scoped complaint collection.
//!
//! Everything here is a linear scan; callers re-run these on every
//! query rather than caching.

use crate::complaint::{Category, Complaint, Priority, Status, CATEGORIES, STATUS_ORDER};
use crate::department::Department;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate snapshot backing the dashboard and report views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub by_status: BTreeMap<Status, usize>,
    pub by_department: BTreeMap<Department, usize>,
    /// Fraction of complaints resolved, 0..1.
    pub resolution_rate: f64,
    /// Mean hours from creation to last update over resolved complaints.
    pub avg_resolution_hours: f64,
}

impl AnalyticsSnapshot {
    /// Resolution rate as the rounded integer percent shown on the
    /// dashboard tile.
    pub fn resolution_percent(&self) -> u32 {
        (self.resolution_rate * 100.0).round() as u32
    }
}

/// Compute the snapshot for a complaint collection.
pub fn snapshot(complaints: &[Complaint]) -> AnalyticsSnapshot {
    let mut by_status: BTreeMap<Status, usize> = BTreeMap::new();
    for &status in STATUS_ORDER {
        by_status.insert(status, 0);
    }
    let mut by_department: BTreeMap<Department, usize> = BTreeMap::new();
    for c in complaints {
        *by_status.entry(c.status).or_insert(0) += 1;
        *by_department.entry(c.department).or_insert(0) += 1;
    }

    let total = complaints.len();
    let resolved: Vec<&Complaint> = complaints
        .iter()
        .filter(|c| c.status == Status::Resolved)
        .collect();
    let resolution_rate = if total > 0 {
        resolved.len() as f64 / total as f64
    } else {
        0.0
    };
    let avg_resolution_hours = if resolved.is_empty() {
        0.0
    } else {
        let total_hours: f64 = resolved
            .iter()
            .map(|c| (c.updated_at - c.created_at).num_minutes() as f64 / 60.0)
            .sum();
        total_hours / resolved.len() as f64
    };

    AnalyticsSnapshot {
        by_status,
        by_department,
        resolution_rate,
        avg_resolution_hours,
    }
}

/// Complaints not yet resolved.
pub fn open_count(complaints: &[Complaint]) -> usize {
    complaints.iter().filter(|c| c.is_open()).count()
}

/// Complaints at HIGH priority.
pub fn high_priority_count(complaints: &[Complaint]) -> usize {
    complaints
        .iter()
        .filter(|c| c.priority == Priority::High)
        .count()
}

/// Per-category counts in report order, including zero rows.
pub fn category_counts(complaints: &[Complaint]) -> Vec<(Category, usize)> {
    CATEGORIES
        .iter()
        .map(|&cat| {
            let count = complaints.iter().filter(|c| c.category == cat).count();
            (cat, count)
        })
        .collect()
}

/// Complaints per creation date, ascending by date.
pub fn daily_counts(complaints: &[Complaint]) -> Vec<(NaiveDate, usize)> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for c in complaints {
        *by_day.entry(c.created_at.date_naive()).or_insert(0) += 1;
    }
    by_day.into_iter().collect()
}

/// Complaints overdue at `now`.
pub fn overdue_count(complaints: &[Complaint], now: DateTime<Utc>) -> usize {
    complaints.iter().filter(|c| c.is_overdue(now)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_complaints;
    use chrono::Duration;

    #[test]
    fn test_snapshot_counts_every_status_row() {
        let complaints = sample_complaints(Utc::now());
        let snap = snapshot(&complaints);

        // All five rows present, even at zero.
        assert_eq!(snap.by_status.len(), STATUS_ORDER.len());
        assert_eq!(snap.by_status[&Status::New], 1);
        assert_eq!(snap.by_status[&Status::Assigned], 1);
        assert_eq!(snap.by_status[&Status::InProgress], 1);
        assert_eq!(snap.by_status[&Status::Accepted], 1);
        assert_eq!(snap.by_status[&Status::Resolved], 0);
    }

    #[test]
    fn test_snapshot_department_counts() {
        let complaints = sample_complaints(Utc::now());
        let snap = snapshot(&complaints);
        assert_eq!(snap.by_department[&Department::Water], 1);
        assert_eq!(snap.by_department[&Department::Sanitation], 1);
        assert_eq!(snap.by_department.get(&Department::Roads), None);
    }

    #[test]
    fn test_resolution_rate_and_percent() {
        let now = Utc::now();
        let mut complaints = sample_complaints(now);
        let snap = snapshot(&complaints);
        assert_eq!(snap.resolution_rate, 0.0);
        assert_eq!(snap.resolution_percent(), 0);

        crate::assign::update_status(&mut complaints, "c3", Status::Resolved);
        let snap = snapshot(&complaints);
        assert_eq!(snap.resolution_rate, 0.25);
        assert_eq!(snap.resolution_percent(), 25);
    }

    #[test]
    fn test_empty_collection_snapshot() {
        let snap = snapshot(&[]);
        assert_eq!(snap.resolution_rate, 0.0);
        assert_eq!(snap.avg_resolution_hours, 0.0);
        assert!(snap.by_department.is_empty());
    }

    #[test]
    fn test_avg_resolution_hours_over_resolved_only() {
        let now = Utc::now();
        let mut complaints = sample_complaints(now);
        // c3 was created 5 hours before its update stamp.
        crate::assign::update_status(&mut complaints, "c3", Status::Resolved);
        for c in complaints.iter_mut().filter(|c| c.id == "c3") {
            c.updated_at = c.created_at + Duration::hours(5);
        }
        let snap = snapshot(&complaints);
        assert!((snap.avg_resolution_hours - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_open_and_high_priority_counts() {
        let now = Utc::now();
        let mut complaints = sample_complaints(now);
        assert_eq!(open_count(&complaints), 4);
        assert_eq!(high_priority_count(&complaints), 2);

        crate::assign::update_status(&mut complaints, "c1", Status::Resolved);
        assert_eq!(open_count(&complaints), 3);
    }

    #[test]
    fn test_category_counts_include_zero_rows() {
        let complaints = sample_complaints(Utc::now());
        let counts = category_counts(&complaints);
        assert_eq!(counts.len(), CATEGORIES.len());
        assert!(counts.contains(&(Category::Pothole, 1)));
        assert!(counts.contains(&(Category::Sewage, 0)));
    }

    #[test]
    fn test_daily_counts_ascending() {
        let complaints = sample_complaints(Utc::now());
        let days = daily_counts(&complaints);
        let total: usize = days.iter().map(|(_, n)| n).sum();
        assert_eq!(total, complaints.len());
        for pair in days.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
