use personio_hr_client::personio::employee::{EmployeeRecord, RawEmployee};
use serde_json::json;

fn raw_employee(attributes: serde_json::Value) -> RawEmployee {
    serde_json::from_value(json!({ "attributes": attributes }))
        .expect("Expected the fixture to deserialize")
}

fn full_fixture() -> RawEmployee {
    raw_employee(json!({
        "id": {"label": "ID", "type": "integer", "value": 13649297},
        "email": {"label": "Email", "type": "standard", "value": "a@b.com"},
        "first_name": {"label": "First name", "type": "standard", "value": "Max"},
        "last_name": {"label": "Last name", "type": "standard", "value": "Mustermann"},
        "status": {"label": "Status", "type": "standard", "value": "active"},
        "created_at": {"label": "Created at", "type": "date", "value": "2020-01-01T00:00:00+01:00"},
        "last_modified_at": {"label": "Last modified", "type": "date", "value": "2024-03-01T10:30:00+02:00"},
        "gender": {"label": "Gender", "type": "standard", "value": "diverse"},
        "department": {"label": "Department", "type": "Department", "value": {"id": 7.0, "name": "Operations"}},
        "team": {"label": "Team", "type": "Team", "value": {"id": 3, "name": "Platform"}},
        "office": {"label": "Office", "type": "Office", "value": {"name": "Zurich"}},
        "subcompany": {"label": "Subcompany", "type": "standard", "value": "ACME AG"},
        "supervisor": {"label": "Supervisor", "type": "Employee", "value": {
            "id": {"label": "ID", "value": 42.0},
            "email": {"label": "Email", "value": "boss@b.com"},
            "first_name": {"label": "First name", "value": "Eva"},
            "last_name": {"label": "Last name", "value": "Example"}
        }},
        "employment_type": {"type": "standard", "value": "internal"},
        "position": {"type": "standard", "value": "Engineer"},
        "hire_date": {"type": "date", "value": "2021-04-01"},
        "vacation_day_balance": {"type": "decimal", "value": 12.5},
        "weekly_working_hours": {"type": "decimal", "value": 40.0},
        "fix_salary": {"type": "decimal", "value": 90000.0},
        "fix_salary_interval": {"type": "standard", "value": "yearly"},
        "hourly_salary": {"type": "decimal", "value": null},
        "dynamic_87912": {"label": "Badge", "type": "integer", "value": 9000},
        "dynamic_colors": {"label": "Colors", "type": "tags", "value": "red,blue,green"},
        "dynamic_7124008": {"label": "Phone", "type": "standard", "value": "044 668 1800"},
        "dynamic_secret": {"label": "Secret", "type": "standard", "value": null},
        "profile_picture": {"label": "Picture", "type": "standard", "value": "https://example.com/p.png"}
    }))
}

#[test]
fn fixed_fields_are_extracted() {
    let record = EmployeeRecord::from_raw(&full_fixture());

    assert_eq!(record.id, Some(13649297));
    assert_eq!(record.email.as_deref(), Some("a@b.com"));
    assert_eq!(record.first_name.as_deref(), Some("Max"));
    assert_eq!(record.last_name.as_deref(), Some("Mustermann"));
    assert_eq!(record.status.as_deref(), Some("active"));
    assert_eq!(record.created_at.as_deref(), Some("2019-12-31T23:00:00Z"));
    assert_eq!(record.last_modified_at.as_deref(), Some("2024-03-01T08:30:00Z"));
}

#[test]
fn groups_are_assembled_from_their_member_attributes() {
    let record = EmployeeRecord::from_raw(&full_fixture());

    let profile = record.profile.expect("Expected a profile group");
    assert_eq!(profile.gender.as_deref(), Some("diverse"));
    assert_eq!(profile.department.as_deref(), Some("Operations"));
    assert_eq!(profile.department_id, Some(7));
    assert_eq!(profile.team.as_deref(), Some("Platform"));
    assert_eq!(profile.team_id, Some(3));
    assert_eq!(profile.office.as_deref(), Some("Zurich"));
    assert_eq!(profile.subcompany.as_deref(), Some("ACME AG"));
    let supervisor = profile.supervisor.expect("Expected a supervisor record");
    assert_eq!(supervisor.id, Some(42));
    assert_eq!(supervisor.email.as_deref(), Some("boss@b.com"));

    let hr_info = record.hr_info.expect("Expected an hr_info group");
    assert_eq!(hr_info.employment_type.as_deref(), Some("internal"));
    assert_eq!(hr_info.position.as_deref(), Some("Engineer"));
    assert_eq!(hr_info.hire_date.as_deref(), Some("2021-04-01T00:00:00Z"));
    assert_eq!(hr_info.vacation_day_balance, Some(12.5));
    assert_eq!(hr_info.weekly_working_hours, Some(40.0));
    assert_eq!(hr_info.termination_date, None);

    let salary_data = record.salary_data.expect("Expected a salary_data group");
    assert_eq!(salary_data.fix_salary, Some(90000.0));
    assert_eq!(salary_data.fix_salary_interval.as_deref(), Some("yearly"));
    assert_eq!(salary_data.hourly_salary, None);
}

#[test]
fn dynamic_keys_are_partitioned_by_declared_type() {
    let record = EmployeeRecord::from_raw(&full_fixture());

    assert_eq!(
        record.tag_attributes.get("dynamic_colors"),
        Some(&vec!["red".to_string(), "blue".to_string(), "green".to_string()])
    );
    assert!(
        !record.dynamic_attributes.contains_key("dynamic_colors"),
        "Expected a tags key to be absent from dynamic_attributes"
    );

    assert_eq!(
        record.dynamic_attributes.get("dynamic_87912"),
        Some(&Some("9000".to_string()))
    );
    assert_eq!(
        record.dynamic_attributes.get("dynamic_7124008"),
        Some(&Some("044 668 1800".to_string()))
    );
    assert!(
        !record.tag_attributes.contains_key("dynamic_87912"),
        "Expected a non-tags key to be absent from tag_attributes"
    );
}

#[test]
fn redacted_dynamic_keys_keep_their_entry() {
    let record = EmployeeRecord::from_raw(&full_fixture());

    assert_eq!(record.dynamic_attributes.get("dynamic_secret"), Some(&None));
}

#[test]
fn unmapped_fixed_keys_are_dropped() {
    let record = EmployeeRecord::from_raw(&full_fixture());

    assert_eq!(record.dynamic_attributes.len(), 3);
    assert_eq!(record.tag_attributes.len(), 1);
    assert!(
        !record.dynamic_attributes.contains_key("profile_picture"),
        "Expected an unmapped non-dynamic key to be dropped"
    );
}

#[test]
fn groups_are_omitted_when_every_member_is_null() {
    let record = EmployeeRecord::from_raw(&raw_employee(json!({
        "id": {"type": "integer", "value": 1},
        "email": {"type": "standard", "value": "a@b.com"},
        "gender": {"type": "standard", "value": null},
        "fix_salary": {"type": "decimal", "value": null}
    })));

    assert_eq!(record.profile, None);
    assert_eq!(record.hr_info, None);
    assert_eq!(record.salary_data, None);
}

#[test]
fn one_readable_member_keeps_its_group() {
    let record = EmployeeRecord::from_raw(&raw_employee(json!({
        "id": {"type": "integer", "value": 1},
        "gender": {"type": "standard", "value": "female"}
    })));

    let profile = record.profile.expect("Expected a profile group");
    assert_eq!(profile.gender.as_deref(), Some("female"));
    assert_eq!(profile.department, None);
    assert_eq!(record.hr_info, None);
    assert_eq!(record.salary_data, None);
}

#[test]
fn assembly_is_deterministic_for_identical_input() {
    let raw = full_fixture();
    let first = EmployeeRecord::from_raw(&raw);
    let second = EmployeeRecord::from_raw(&raw);

    assert_eq!(first, second, "Expected field-for-field identical records");
    assert!(
        first.dynamic_attributes.keys().eq(second.dynamic_attributes.keys()),
        "Expected a stable dynamic key order"
    );
}

#[test]
fn omitted_groups_are_not_serialized() {
    let sparse = EmployeeRecord::from_raw(&raw_employee(json!({
        "id": {"type": "integer", "value": 1}
    })));
    let serialized = serde_json::to_value(&sparse).expect("Expected the record to serialize");
    let object = serialized.as_object().expect("Expected a JSON object");

    assert!(!object.contains_key("profile"));
    assert!(!object.contains_key("hr_info"));
    assert!(!object.contains_key("salary_data"));

    let full = EmployeeRecord::from_raw(&full_fixture());
    let serialized = serde_json::to_value(&full).expect("Expected the record to serialize");
    let object = serialized.as_object().expect("Expected a JSON object");

    assert!(object.contains_key("profile"));
    assert!(object.contains_key("hr_info"));
    assert!(object.contains_key("salary_data"));
}
