//! Complaint records for the municipal console.
//!
//! A complaint is created from a citizen report, routed to exactly one
//! department by its category, and worked through an ordered status chain.
//! The SLA window is fixed at creation time; overdue is always recomputed
//! against the wall clock.

use crate::department::{route_department, Department};
use crate::error::NagarError;
use crate::geo::GeoPoint;
use crate::sla;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Complaint category as reported by the citizen.
/// Every category routes to exactly one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pothole,
    Garbage,
    Streetlight,
    Water,
    Sewage,
    Other,
}

/// All categories in report order.
pub const CATEGORIES: &[Category] = &[
    Category::Pothole,
    Category::Garbage,
    Category::Streetlight,
    Category::Water,
    Category::Sewage,
    Category::Other,
];

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pothole => "pothole",
            Self::Garbage => "garbage",
            Self::Streetlight => "streetlight",
            Self::Water => "water",
            Self::Sewage => "sewage",
            Self::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = NagarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pothole" => Ok(Self::Pothole),
            "garbage" => Ok(Self::Garbage),
            "streetlight" => Ok(Self::Streetlight),
            "water" => Ok(Self::Water),
            "sewage" => Ok(Self::Sewage),
            "other" => Ok(Self::Other),
            _ => Err(NagarError::UnknownCategory(s.to_string())),
        }
    }
}

/// Complaint priority. Ordering follows urgency: LOW < MEDIUM < HIGH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Priority {
    type Err = NagarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(NagarError::UnknownPriority(s.to_string())),
        }
    }
}

/// Complaint workflow status.
/// Ordering follows the chain NEW → ACCEPTED → ASSIGNED → IN_PROGRESS → RESOLVED.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    New,
    Accepted,
    Assigned,
    InProgress,
    Resolved,
}

/// All statuses in chain order. Charts and tables iterate in this order.
pub const STATUS_ORDER: &[Status] = &[
    Status::New,
    Status::Accepted,
    Status::Assigned,
    Status::InProgress,
    Status::Resolved,
];

impl Status {
    /// Whether moving to `next` advances along the chain.
    /// Transitions are not enforced; callers may use this to warn on
    /// regressions (e.g. RESOLVED back to NEW).
    pub fn is_forward(self, next: Status) -> bool {
        next > self
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::New => "NEW",
            Self::Accepted => "ACCEPTED",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Status {
    type Err = NagarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Self::New),
            "ACCEPTED" => Ok(Self::Accepted),
            "ASSIGNED" => Ok(Self::Assigned),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "RESOLVED" => Ok(Self::Resolved),
            _ => Err(NagarError::UnknownStatus(s.to_string())),
        }
    }
}

/// Where the complaint was reported: point plus administrative ward/zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    /// Ward code, e.g. "W-12"
    pub ward: String,
    /// Zone label, e.g. "Zone A"
    pub zone: String,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Attachment media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Video,
}

/// Photo or video evidence attached to a complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub url: String,
}

/// Reporting citizen. All fields optional; anonymous reports carry nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reporter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

/// A municipal complaint record.
///
/// Invariants held at construction: `department` is the routing table's
/// department for `category`, and `sla_hours` is derived from
/// `(category, priority)` once and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub department: Department,
    pub priority: Priority,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// SLA window in hours, fixed at creation.
    pub sla_hours: i64,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<Reporter>,
    /// Staff id of the assignee, when assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl Complaint {
    /// Create a new complaint. Department and SLA window are derived here;
    /// status starts at NEW.
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        category: Category,
        priority: Priority,
        created_at: DateTime<Utc>,
        location: Location,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category,
            department: route_department(category),
            priority,
            status: Status::New,
            created_at,
            updated_at: created_at,
            sla_hours: sla::sla_hours_for(category, priority),
            location,
            attachments: Vec::new(),
            reporter: None,
            assigned_to: None,
        }
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the reporter.
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Attach evidence.
    pub fn with_attachment(mut self, kind: AttachmentKind, url: &str) -> Self {
        self.attachments.push(Attachment {
            kind,
            url: url.to_string(),
        });
        self
    }

    /// Set the assignee.
    pub fn with_assignee(mut self, staff_id: &str) -> Self {
        self.assigned_to = Some(staff_id.to_string());
        self
    }

    /// When the SLA window closes.
    pub fn due_at(&self) -> DateTime<Utc> {
        sla::due_at(self)
    }

    /// Whether the SLA window has elapsed at `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        sla::is_overdue(self, now)
    }

    /// Whether the complaint still needs work.
    pub fn is_open(&self) -> bool {
        self.status != Status::Resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_location() -> Location {
        Location {
            lat: 19.1,
            lng: 72.86,
            ward: "W-12".to_string(),
            zone: "Zone A".to_string(),
        }
    }

    #[test]
    fn test_complaint_creation_derives_department_and_sla() {
        let now = Utc::now();
        let c = Complaint::new(
            "c1",
            "Pothole near bus stop",
            "Large pothole causing traffic jams.",
            Category::Pothole,
            Priority::High,
            now,
            sample_location(),
        );

        assert_eq!(c.department, Department::PublicWorks);
        assert_eq!(c.sla_hours, 16);
        assert_eq!(c.status, Status::New);
        assert_eq!(c.updated_at, c.created_at);
        assert!(c.assigned_to.is_none());
        assert!(c.is_open());
    }

    #[test]
    fn test_status_chain_order() {
        assert!(Status::New < Status::Accepted);
        assert!(Status::Accepted < Status::Assigned);
        assert!(Status::Assigned < Status::InProgress);
        assert!(Status::InProgress < Status::Resolved);
    }

    #[test]
    fn test_status_is_forward() {
        assert!(Status::New.is_forward(Status::Accepted));
        assert!(Status::New.is_forward(Status::Resolved));
        assert!(!Status::Resolved.is_forward(Status::New));
        assert!(!Status::Assigned.is_forward(Status::Assigned));
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }

    #[test]
    fn test_status_display_round_trip() {
        for &s in STATUS_ORDER {
            let parsed: Status = s.to_string().parse().unwrap();
            assert_eq!(parsed, s);
        }
        assert!("PENDING".parse::<Status>().is_err());
    }

    #[test]
    fn test_category_display_round_trip() {
        for &c in CATEGORIES {
            let parsed: Category = c.to_string().parse().unwrap();
            assert_eq!(parsed, c);
        }
        assert!("noise".parse::<Category>().is_err());
    }

    #[test]
    fn test_wire_serialization_matches_original_shape() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let json = serde_json::to_string(&Category::Streetlight).unwrap();
        assert_eq!(json, "\"streetlight\"");
        let json = serde_json::to_string(&Priority::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
    }

    #[test]
    fn test_complaint_json_field_names_are_camel_case() {
        let now = Utc::now();
        let c = Complaint::new(
            "c9",
            "Water leakage",
            "Leakage visible on main road.",
            Category::Water,
            Priority::High,
            now,
            sample_location(),
        )
        .with_assignee("s4");

        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("slaHours").is_some());
        assert_eq!(json["assignedTo"], "s4");
        assert_eq!(json["department"], "Water");
    }

    #[test]
    fn test_attachment_kind_wire_names() {
        let a = Attachment {
            kind: AttachmentKind::Image,
            url: "/placeholder.svg".to_string(),
        };
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["type"], "image");
    }
}
