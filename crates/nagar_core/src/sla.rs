//! SLA window arithmetic.
//!
//! The window is fixed when the complaint is created; whether it has
//! elapsed is recomputed against the given clock on every call, never
//! cached.

use crate::complaint::{Category, Complaint, Priority};
use chrono::{DateTime, Duration, Utc};

/// Base resolution window per priority, in hours.
pub fn base_hours(priority: Priority) -> i64 {
    match priority {
        Priority::High => 24,
        Priority::Medium => 48,
        Priority::Low => 72,
    }
}

/// Category adjustment to the base window, in hours. Potholes get a
/// tighter window; everything else is unadjusted.
pub fn category_adjustment(category: Category) -> i64 {
    match category {
        Category::Pothole => -8,
        _ => 0,
    }
}

/// The SLA window for a `(category, priority)` pair, in hours.
pub fn sla_hours_for(category: Category, priority: Priority) -> i64 {
    base_hours(priority) + category_adjustment(category)
}

/// When the complaint's SLA window closes.
pub fn due_at(complaint: &Complaint) -> DateTime<Utc> {
    complaint.created_at + Duration::hours(complaint.sla_hours)
}

/// Whether the window has elapsed at `now` (strictly after the deadline).
pub fn is_overdue(complaint: &Complaint, now: DateTime<Utc>) -> bool {
    now > due_at(complaint)
}
