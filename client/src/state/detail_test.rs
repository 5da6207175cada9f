use listings::ProjectStatus;

use super::*;

fn project_p() -> Project {
    Project {
        land_area: Some("10 Katha".to_owned()),
        flat_sizes: vec!["2000 sft".to_owned()],
        ..Project::new("p", "Project P", "Banani", ProjectStatus::Completed, "/assets/p.jpg")
    }
}

fn project_q() -> Project {
    Project { units: Some(40), ..Project::new("q", "Project Q", "Uttara", ProjectStatus::Ongoing, "/assets/q.jpg") }
}

#[test]
fn closed_by_default_and_renders_nothing() {
    let modal = DetailModalState::default();
    assert!(!modal.is_open());
    assert!(modal.view().is_none());
}

#[test]
fn open_renders_selected_project() {
    let mut modal = DetailModalState::default();
    modal.open(project_p());
    assert!(modal.is_open());
    let view = modal.view().unwrap();
    assert_eq!(view.title, "Project P");
    assert_eq!(view.rows.len(), 1);
}

#[test]
fn close_clears_the_project() {
    let mut modal = DetailModalState::default();
    modal.open(project_p());
    modal.close();
    assert!(!modal.is_open());
    assert!(modal.project().is_none());
    assert!(modal.view().is_none());
}

#[test]
fn reopen_with_other_project_shows_only_its_fields() {
    let mut modal = DetailModalState::default();
    modal.open(project_p());
    modal.close();
    modal.open(project_q());

    let view = modal.view().unwrap();
    assert_eq!(view.id, "q");
    assert_eq!(view.title, "Project Q");
    assert_eq!(view.address, "Uttara");
    assert_eq!(view.rows.iter().map(|r| r.label).collect::<Vec<_>>(), vec!["Total Units"]);
    assert!(view.flat_sizes.is_empty());
    assert!(view.flat_sizes_title.is_none());
}

#[test]
fn open_without_close_replaces_project() {
    let mut modal = DetailModalState::default();
    modal.open(project_p());
    modal.open(project_q());
    assert_eq!(modal.project().map(|p| p.id.as_str()), Some("q"));
}
