use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog criteria.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CriterionId(pub String);

impl CriterionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for prioritization records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for dashboard pages (one matrix per page).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub String);

/// One weighted evaluation dimension with a 1-5 rating guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: &'static str,
    pub description: &'static str,
    /// Integer percentage; the active catalog's weights sum to exactly 100.
    pub weight: u8,
    /// Guide text for ratings 1 through 5, indexed by rating minus one.
    pub rating_guide: [&'static str; 5],
}

impl Criterion {
    pub fn describe_rating(&self, rating: u8) -> Option<&'static str> {
        match rating {
            1..=5 => Some(self.rating_guide[usize::from(rating - 1)]),
            _ => None,
        }
    }
}

/// Discretized classification of a record's total weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Publication lifecycle state of a record. Orthogonal to the free-form
/// operational status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Draft,
    Published,
}

impl RecordStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }
}

/// Authored payload for a new or edited record. Derived score fields are
/// never part of a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSubmission {
    pub title: String,
    pub description: String,
    /// Free-form workflow label (e.g. "Planning", "Under Review").
    pub operational_status: String,
    pub criteria_scores: BTreeMap<CriterionId, u8>,
}

/// A scored project request on the prioritization matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizationRecord {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub operational_status: String,
    pub criteria_scores: BTreeMap<CriterionId, u8>,
    pub weighted_scores: BTreeMap<CriterionId, f64>,
    pub total_weighted_score: f64,
    pub priority_level: PriorityLevel,
    pub record_status: RecordStatus,
    pub submitted_by: String,
    pub date_created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

/// The identity (or anonymity) and admin standing used when listing records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub identity: Option<String>,
    pub is_page_admin: bool,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self {
            identity: None,
            is_page_admin: false,
        }
    }

    pub fn authenticated(identity: impl Into<String>, is_page_admin: bool) -> Self {
        Self {
            identity: Some(identity.into()),
            is_page_admin,
        }
    }
}

/// Dashboard roles ordered from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Administrator,
    PmoStaff,
    Faculty,
    Student,
}

impl UserRole {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Administrator,
            Self::PmoStaff,
            Self::Faculty,
            Self::Student,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::PmoStaff => "PMO Staff",
            Self::Faculty => "Faculty",
            Self::Student => "Student",
        }
    }
}

/// A page grant on a user profile. `AllPages` replaces the wildcard
/// sentinel the legacy dashboard kept in its allowed-pages list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageScope {
    AllPages,
    Page(PageId),
}

/// Session profile supplied by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub identity: String,
    pub role: UserRole,
    pub allowed_pages: Vec<PageScope>,
}
