//! Projection of a project into the rows shown by the detail modal.
//!
//! DESIGN
//! ======
//! The modal never inspects optional fields itself. It renders a
//! [`DetailView`], which already contains only populated attributes, so
//! unset values can never show up as empty placeholders.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::icon::Icon;
use crate::project::{Project, ProjectStatus};

/// One populated attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    pub icon: Icon,
    pub label: &'static str,
    pub value: String,
}

/// Brochure link. `openable` is false for the `#` placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brochure {
    pub url: String,
    pub openable: bool,
}

/// Everything the modal body renders for one project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    pub image: String,
    pub address: String,
    pub rows: Vec<DetailRow>,
    pub flat_sizes_title: Option<&'static str>,
    pub flat_sizes: Vec<String>,
    pub brochure: Option<Brochure>,
}

impl DetailView {
    #[must_use]
    pub fn of(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            status: project.status,
            image: project.image.clone(),
            address: project.display_address().to_owned(),
            rows: fact_rows(project),
            flat_sizes_title: flat_sizes_title(project),
            flat_sizes: project.flat_sizes.clone(),
            brochure: brochure(project),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Populated "Project Specifications" rows, in display order.
#[must_use]
pub fn fact_rows(project: &Project) -> Vec<DetailRow> {
    let details = project.details.as_ref();
    let candidates = [
        (Icon::Ruler, "Land Area", non_blank(project.land_area.as_deref())),
        (Icon::Layers, "No. of Floors", non_blank(project.floors())),
        (Icon::Home, "Total Units", project.units.filter(|n| *n > 0).map(|n| format!("{n} Units"))),
        (Icon::ArrowUpDown, "Elevator", details.and_then(|d| d.elevator).map(|e| e.as_str().to_owned())),
        (Icon::Car, "Parking", details.and_then(|d| d.parking).map(|p| p.as_str().to_owned())),
        (Icon::Calendar, "Completion", non_blank(project.completion_date.as_deref())),
    ];

    candidates
        .into_iter()
        .filter_map(|(icon, label, value)| value.map(|value| DetailRow { icon, label, value }))
        .collect()
}

/// Heading for the flat-size badges, or `None` when there are no sizes.
#[must_use]
pub fn flat_sizes_title(project: &Project) -> Option<&'static str> {
    if project.flat_sizes.is_empty() {
        return None;
    }
    if project.status == ProjectStatus::Completed {
        Some("Flat Sizes")
    } else {
        Some("Available Flat Sizes")
    }
}

/// Brochure download, offered only while a project is ongoing.
#[must_use]
pub fn brochure(project: &Project) -> Option<Brochure> {
    if project.status != ProjectStatus::Ongoing {
        return None;
    }
    let url = non_blank(project.brochure_url.as_deref())?;
    let openable = url != "#";
    Some(Brochure { url, openable })
}
