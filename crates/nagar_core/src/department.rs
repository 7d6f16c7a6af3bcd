//! Municipal departments and the category routing table.
//!
//! Routing is a total mapping: every category lands in exactly one
//! department, so lookup can never fail.

use crate::complaint::Category;
use crate::error::NagarError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A municipal department. Wire values are the display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Sanitation,
    Roads,
    Streetlights,
    Water,
    #[serde(rename = "Public Works")]
    PublicWorks,
    Electrical,
}

/// All departments in display order.
pub const DEPARTMENTS: &[Department] = &[
    Department::Sanitation,
    Department::Roads,
    Department::Streetlights,
    Department::Water,
    Department::PublicWorks,
    Department::Electrical,
];

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sanitation => "Sanitation",
            Self::Roads => "Roads",
            Self::Streetlights => "Streetlights",
            Self::Water => "Water",
            Self::PublicWorks => "Public Works",
            Self::Electrical => "Electrical",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Department {
    type Err = NagarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sanitation" => Ok(Self::Sanitation),
            "Roads" => Ok(Self::Roads),
            "Streetlights" => Ok(Self::Streetlights),
            "Water" => Ok(Self::Water),
            "Public Works" => Ok(Self::PublicWorks),
            "Electrical" => Ok(Self::Electrical),
            _ => Err(NagarError::UnknownDepartment(s.to_string())),
        }
    }
}

/// Route a category to its owning department.
/// Exhaustive over the category enum; adding a category is a compile error
/// until it is routed here.
pub fn route_department(category: Category) -> Department {
    match category {
        Category::Pothole => Department::PublicWorks,
        Category::Garbage => Department::Sanitation,
        Category::Streetlight => Department::Electrical,
        Category::Water => Department::Water,
        Category::Sewage => Department::Water,
        Category::Other => Department::PublicWorks,
    }
}
