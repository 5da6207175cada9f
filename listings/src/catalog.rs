//! Static project catalog and the status filter over it.
//!
//! The catalog is built once on first access and never mutated. Filtering is
//! a pure projection that keeps catalog order.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::LazyLock;

use crate::project::{ElevatorType, ParkingAvailability, Project, ProjectDetails, ProjectStatus};

/// One button in the showcase filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub status: ProjectStatus,
}

/// Filter bar entries, in display order.
pub const FILTERS: &[FilterOption] = &[
    FilterOption { label: "Ongoing", status: ProjectStatus::Ongoing },
    FilterOption { label: "Completed", status: ProjectStatus::Completed },
    FilterOption { label: "Upcoming", status: ProjectStatus::Upcoming },
];

static CATALOG: LazyLock<Vec<Project>> = LazyLock::new(build_catalog);

/// The full ordered catalog.
#[must_use]
pub fn catalog() -> &'static [Project] {
    &CATALOG
}

/// Projects whose status equals `status`, in catalog order.
#[must_use]
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<&Project> {
    projects.iter().filter(|p| p.status == status).collect()
}

/// Like [`filter_by_status`] for a raw tag. Unknown tags match nothing.
#[must_use]
pub fn filter_by_tag<'a>(projects: &'a [Project], tag: &str) -> Vec<&'a Project> {
    match tag.parse::<ProjectStatus>() {
        Ok(status) => filter_by_status(projects, status),
        Err(_) => Vec::new(),
    }
}

fn sizes(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_owned()).collect()
}

fn build_catalog() -> Vec<Project> {
    vec![
        Project {
            land_area: Some("10 Katha".to_owned()),
            building_height: Some("G+14".to_owned()),
            flat_sizes: sizes(&["1650 sft", "1850 sft", "2100 sft"]),
            units: Some(120),
            completion_date: Some("2023".to_owned()),
            details: Some(ProjectDetails {
                elevator: Some(ElevatorType::Two),
                parking: Some(ParkingAvailability::Available),
                floors: Some("B+G+14".to_owned()),
                full_address: Some("Plot 21, Road 7, Block C, Bashundhara R/A, Dhaka".to_owned()),
            }),
            ..Project::new(
                "emerald-heights",
                "Emerald Heights",
                "Bashundhara R/A",
                ProjectStatus::Completed,
                "/assets/projects/project-1.jpg",
            )
        },
        Project {
            land_area: Some("12 Katha".to_owned()),
            building_height: Some("G+12".to_owned()),
            completion_date: Some("2022".to_owned()),
            details: Some(ProjectDetails {
                elevator: Some(ElevatorType::Three),
                parking: Some(ParkingAvailability::Available),
                floors: None,
                full_address: None,
            }),
            ..Project::new(
                "skyline-corporate-tower",
                "Skyline Corporate Tower",
                "Gulshan Avenue",
                ProjectStatus::Completed,
                "/assets/projects/project-2.jpg",
            )
        },
        Project {
            land_area: Some("6 Katha".to_owned()),
            flat_sizes: sizes(&["2400 sft", "2750 sft"]),
            units: Some(24),
            completion_date: Some("2023".to_owned()),
            details: Some(ProjectDetails {
                elevator: Some(ElevatorType::One),
                parking: Some(ParkingAvailability::Limited),
                floors: Some("G+6".to_owned()),
                full_address: None,
            }),
            ..Project::new(
                "serenity-villas",
                "Serenity Villas",
                "Aftab Nagar",
                ProjectStatus::Completed,
                "/assets/projects/project-3.jpg",
            )
        },
        Project {
            land_area: Some("8.5 Katha".to_owned()),
            building_height: Some("G+9".to_owned()),
            flat_sizes: sizes(&["1250 sft", "1380 sft", "1520 sft"]),
            units: Some(36),
            completion_date: Some("Q2 2026".to_owned()),
            brochure_url: Some("/assets/brochures/horizon-residences.pdf".to_owned()),
            details: Some(ProjectDetails {
                elevator: Some(ElevatorType::One),
                parking: Some(ParkingAvailability::Available),
                floors: Some("B+G+9".to_owned()),
                full_address: Some("House 14, Road 3, Sector 10, Jolshiri Abashon, Dhaka".to_owned()),
            }),
            ..Project::new(
                "horizon-residences",
                "Horizon Residences",
                "Jolshiri Abashon",
                ProjectStatus::Ongoing,
                "/assets/projects/project-4.jpg",
            )
        },
        Project {
            land_area: Some("5 Katha".to_owned()),
            flat_sizes: sizes(&["1100 sft", "1200 sft"]),
            units: Some(18),
            completion_date: Some("Q4 2026".to_owned()),
            brochure_url: Some("#".to_owned()),
            details: Some(ProjectDetails {
                elevator: Some(ElevatorType::One),
                parking: Some(ParkingAvailability::Limited),
                floors: Some("G+8".to_owned()),
                full_address: None,
            }),
            ..Project::new(
                "garden-court",
                "Garden Court",
                "Mirpur DOHS",
                ProjectStatus::Ongoing,
                "/assets/projects/project-5.jpg",
            )
        },
        Project {
            land_area: Some("20 Katha".to_owned()),
            building_height: Some("G+20".to_owned()),
            units: Some(250),
            completion_date: Some("2028".to_owned()),
            ..Project::new(
                "pinnacle-plaza",
                "Pinnacle Plaza",
                "Uttara Sector 4",
                ProjectStatus::Upcoming,
                "/assets/projects/project-6.jpg",
            )
        },
    ]
}
