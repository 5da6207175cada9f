use super::*;

fn project(id: &str, status: ProjectStatus) -> Project {
    Project::new(id, id, "Dhaka", status, "/assets/x.jpg")
}

/// {completed, completed, completed, ongoing, ongoing, upcoming}
fn six() -> Vec<Project> {
    vec![
        project("c1", ProjectStatus::Completed),
        project("c2", ProjectStatus::Completed),
        project("c3", ProjectStatus::Completed),
        project("o1", ProjectStatus::Ongoing),
        project("o2", ProjectStatus::Ongoing),
        project("u1", ProjectStatus::Upcoming),
    ]
}

fn ids(state: &ShowcaseState) -> Vec<&str> {
    state.visible().map(|p| p.id.as_str()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn starts_on_ongoing_at_index_zero() {
    let state = ShowcaseState::new(six());
    assert_eq!(state.active_filter(), ProjectStatus::Ongoing);
    assert_eq!(state.active_index(), 0);
    assert_eq!(ids(&state), vec!["o1", "o2"]);
    assert_eq!(state.focused().map(|p| p.id.as_str()), Some("o1"));
}

#[test]
fn visible_matches_catalog_filter() {
    let catalog = six();
    let mut state = ShowcaseState::new(catalog.clone());
    for status in [ProjectStatus::Completed, ProjectStatus::Upcoming, ProjectStatus::Ongoing] {
        state.select_filter(status);
        let expected: Vec<&Project> = filter_by_status(&catalog, status);
        assert_eq!(state.visible().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn select_filter_keeps_catalog_order() {
    let mut state = ShowcaseState::new(six());
    state.select_filter(ProjectStatus::Completed);
    assert_eq!(ids(&state), vec!["c1", "c2", "c3"]);
    state.select_filter(ProjectStatus::Upcoming);
    assert_eq!(ids(&state), vec!["u1"]);
}

#[test]
fn changing_filter_resets_index() {
    let mut state = ShowcaseState::new(six());
    state.select_filter(ProjectStatus::Completed);
    state.next();
    state.next();
    assert_eq!(state.active_index(), 2);

    state.select_filter(ProjectStatus::Ongoing);
    assert_eq!(state.active_index(), 0);
    assert_eq!(ids(&state), vec!["o1", "o2"]);
}

#[test]
fn reselecting_same_filter_resets_index_and_replays_reveal() {
    let mut state = ShowcaseState::new(six());
    state.next();
    let seq = state.reveal_seq();
    state.select_filter(ProjectStatus::Ongoing);
    assert_eq!(state.active_index(), 0);
    assert_eq!(state.reveal_seq(), seq + 1);
}

#[test]
fn default_uses_site_catalog() {
    let state = ShowcaseState::default();
    assert_eq!(state.len(), 2);
    assert!(state.visible().all(|p| p.status == ProjectStatus::Ongoing));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_wraps_to_start() {
    let mut state = ShowcaseState::new(six());
    state.select_filter(ProjectStatus::Completed);
    state.next();
    state.next();
    state.next();
    assert_eq!(state.active_index(), 0);
}

#[test]
fn previous_wraps_to_end() {
    let mut state = ShowcaseState::new(six());
    state.select_filter(ProjectStatus::Completed);
    state.previous();
    assert_eq!(state.active_index(), 2);
}

#[test]
fn next_then_previous_is_identity() {
    let mut state = ShowcaseState::new(six());
    state.select_filter(ProjectStatus::Completed);
    for start in 0..state.len() {
        assert!(state.jump_to(start));
        state.next();
        state.previous();
        assert_eq!(state.active_index(), start);
        state.previous();
        state.next();
        assert_eq!(state.active_index(), start);
    }
}

#[test]
fn navigation_on_empty_view_is_noop() {
    let mut state = ShowcaseState::new(vec![project("c1", ProjectStatus::Completed)]);
    assert!(state.is_empty());
    state.next();
    state.previous();
    assert_eq!(state.active_index(), 0);
    assert!(state.focused().is_none());
    assert!(!state.jump_to(0));
}

#[test]
fn single_item_stays_focused() {
    let mut state = ShowcaseState::new(six());
    state.select_filter(ProjectStatus::Upcoming);
    state.next();
    assert_eq!(state.active_index(), 0);
    state.previous();
    assert_eq!(state.active_index(), 0);
}

#[test]
fn jump_to_ignores_out_of_range() {
    let mut state = ShowcaseState::new(six());
    assert!(state.jump_to(1));
    assert_eq!(state.active_index(), 1);
    assert!(!state.jump_to(2));
    assert!(!state.jump_to(usize::MAX));
    assert_eq!(state.active_index(), 1);
}

// =============================================================
// Layout hints
// =============================================================

#[test]
fn few_items_are_centered() {
    let state = ShowcaseState::new(six());
    assert!(state.is_centered());

    let many: Vec<Project> = (0..5).map(|i| project(&format!("o{i}"), ProjectStatus::Ongoing)).collect();
    assert!(!ShowcaseState::new(many).is_centered());
}

#[test]
fn slots_wrap_around_focus() {
    let mut state = ShowcaseState::new(six());
    state.select_filter(ProjectStatus::Completed);
    assert_eq!(state.slot(0), Slot::Active);
    assert_eq!(state.slot(1), Slot::Next);
    assert_eq!(state.slot(2), Slot::Previous);
    assert_eq!(state.slot(3), Slot::Hidden);
    assert_eq!(state.neighbors(), Some((2, 1)));
}

#[test]
fn neighbors_absent_for_single_card() {
    let mut state = ShowcaseState::new(six());
    state.select_filter(ProjectStatus::Upcoming);
    assert_eq!(state.neighbors(), None);
    assert_eq!(state.slot(0), Slot::Active);
}

#[test]
fn two_cards_prefer_next_slot() {
    let state = ShowcaseState::new(six());
    assert_eq!(state.slot(1), Slot::Next);
}
