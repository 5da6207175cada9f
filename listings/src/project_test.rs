use super::*;

#[test]
fn status_parses_known_tags_case_insensitively() {
    assert_eq!("ongoing".parse::<ProjectStatus>(), Ok(ProjectStatus::Ongoing));
    assert_eq!(" Completed ".parse::<ProjectStatus>(), Ok(ProjectStatus::Completed));
    assert_eq!("UPCOMING".parse::<ProjectStatus>(), Ok(ProjectStatus::Upcoming));
}

#[test]
fn status_rejects_unknown_tags() {
    let err = "sold-out".parse::<ProjectStatus>().unwrap_err();
    assert_eq!(err, UnknownStatus("sold-out".to_owned()));
    assert!("".parse::<ProjectStatus>().is_err());
}

#[test]
fn status_default_is_ongoing() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Ongoing);
}

#[test]
fn status_tag_and_label_agree() {
    for status in ProjectStatus::ALL {
        assert_eq!(status.as_str().parse::<ProjectStatus>(), Ok(status));
        assert_eq!(status.label().to_ascii_lowercase(), status.as_str());
        assert_eq!(status.to_string(), status.as_str());
    }
}

#[test]
fn status_serializes_lowercase() {
    let json = serde_json::to_string(&ProjectStatus::Completed).unwrap();
    assert_eq!(json, "\"completed\"");
}

#[test]
fn facility_enums_serialize_to_display_strings() {
    assert_eq!(serde_json::to_string(&ElevatorType::Two).unwrap(), "\"2 Nos\"");
    assert_eq!(
        serde_json::to_string(&ParkingAvailability::NotAvailable).unwrap(),
        "\"Not Available\""
    );
    assert_eq!(ElevatorType::Four.as_str(), "4 Nos");
    assert_eq!(ParkingAvailability::Limited.as_str(), "Limited");
}

#[test]
fn project_deserializes_rich_shape() {
    let json = r#"{
        "id": "p-1",
        "title": "Tower",
        "location": "Gulshan",
        "status": "ongoing",
        "image": "/assets/p1.jpg",
        "landArea": "5 Katha",
        "flatSizes": ["1200 sft", "1450 sft"],
        "units": 18,
        "details": {"elevator": "1 Nos", "parking": "Available", "floors": "G+9"}
    }"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.status, ProjectStatus::Ongoing);
    assert_eq!(project.land_area.as_deref(), Some("5 Katha"));
    assert_eq!(project.flat_sizes, vec!["1200 sft".to_owned(), "1450 sft".to_owned()]);
    let details = project.details.unwrap();
    assert_eq!(details.elevator, Some(ElevatorType::One));
    assert_eq!(details.parking, Some(ParkingAvailability::Available));
    assert_eq!(details.floors.as_deref(), Some("G+9"));
}

#[test]
fn display_address_prefers_full_address() {
    let mut project = Project::new("1", "A", "Banani", ProjectStatus::Ongoing, "a.jpg");
    assert_eq!(project.display_address(), "Banani");

    project.details = Some(ProjectDetails {
        full_address: Some("House 12, Road 5, Banani".to_owned()),
        ..ProjectDetails::default()
    });
    assert_eq!(project.display_address(), "House 12, Road 5, Banani");
}

#[test]
fn display_address_ignores_blank_full_address() {
    let mut project = Project::new("1", "A", "Banani", ProjectStatus::Ongoing, "a.jpg");
    project.details = Some(ProjectDetails { full_address: Some("  ".to_owned()), ..ProjectDetails::default() });
    assert_eq!(project.display_address(), "Banani");
}

#[test]
fn floors_falls_back_to_building_height() {
    let mut project = Project::new("1", "A", "Banani", ProjectStatus::Ongoing, "a.jpg");
    assert_eq!(project.floors(), None);

    project.building_height = Some("G+7".to_owned());
    assert_eq!(project.floors(), Some("G+7"));

    project.details = Some(ProjectDetails { floors: Some("B+G+9".to_owned()), ..ProjectDetails::default() });
    assert_eq!(project.floors(), Some("B+G+9"));
}
