//! Project record model.
//!
//! DESIGN
//! ======
//! A single record shape is used for every development. Descriptive fields
//! are all optional so completed, ongoing, and upcoming projects can carry
//! as much or as little as is known about them. The nested `details` block
//! holds building facilities that only some projects publish.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a development. Partitions the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Ongoing,
    Completed,
    Upcoming,
}

/// Error returned when a raw status tag is not one of the known stages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project status: {0:?}")]
pub struct UnknownStatus(pub String);

impl ProjectStatus {
    pub const ALL: [Self; 3] = [Self::Ongoing, Self::Completed, Self::Upcoming];

    /// Wire/tag form, e.g. `"ongoing"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Upcoming => "upcoming",
        }
    }

    /// Capitalized label used on filter buttons and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Upcoming => "Upcoming",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            "upcoming" => Ok(Self::Upcoming),
            _ => Err(UnknownStatus(raw.to_owned())),
        }
    }
}

/// Elevator availability as published in the brochure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevatorType {
    #[serde(rename = "Not Available")]
    NotAvailable,
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "1 Nos")]
    One,
    #[serde(rename = "2 Nos")]
    Two,
    #[serde(rename = "3 Nos")]
    Three,
    #[serde(rename = "4 Nos")]
    Four,
}

impl ElevatorType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotAvailable => "Not Available",
            Self::Available => "Available",
            Self::One => "1 Nos",
            Self::Two => "2 Nos",
            Self::Three => "3 Nos",
            Self::Four => "4 Nos",
        }
    }
}

/// Parking availability as published in the brochure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParkingAvailability {
    #[serde(rename = "Not Available")]
    NotAvailable,
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Limited")]
    Limited,
}

impl ParkingAvailability {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotAvailable => "Not Available",
            Self::Available => "Available",
            Self::Limited => "Limited",
        }
    }
}

/// Building facilities block. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevator: Option<ElevatorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<ParkingAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_address: Option<String>,
}

/// One real-estate development.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier, unique within the catalog.
    pub id: String,
    pub title: String,
    pub location: String,
    pub status: ProjectStatus,
    /// Asset path or absolute URL of the cover image.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_height: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flat_sizes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brochure_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProjectDetails>,
}

impl Project {
    /// Minimal record with no optional attributes set.
    #[must_use]
    pub fn new(id: &str, title: &str, location: &str, status: ProjectStatus, image: &str) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            location: location.to_owned(),
            status,
            image: image.to_owned(),
            land_area: None,
            building_height: None,
            flat_sizes: Vec::new(),
            units: None,
            completion_date: None,
            brochure_url: None,
            details: None,
        }
    }

    /// Address shown in the detail view: the full address when published,
    /// otherwise the short location.
    #[must_use]
    pub fn display_address(&self) -> &str {
        self.details
            .as_ref()
            .and_then(|d| d.full_address.as_deref())
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(&self.location)
    }

    /// Floor count from the facilities block, falling back to building height.
    #[must_use]
    pub fn floors(&self) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.floors.as_deref())
            .filter(|f| !f.trim().is_empty())
            .or_else(|| self.building_height.as_deref().filter(|h| !h.trim().is_empty()))
    }
}
