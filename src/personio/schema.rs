use serde::{Deserialize, Serialize};

/// Semantic type of a schema attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaType {
    /// Whole number value.
    Number,
    /// Decimal number value.
    Float,
    /// Text value.
    String,
    /// Map of dynamic attribute keys to string values.
    StringMap,
    /// Map of dynamic attribute keys to ordered string lists.
    StringListMap,
    /// Nested attribute group.
    Object,
}

/// Describes one field of the employee record to the consuming
/// configuration system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaAttribute {
    /// Field name as it appears on the record.
    pub name: String,
    /// Semantic type of the field.
    #[serde(rename = "type")]
    pub value_type: SchemaType,
    /// True when the field may be null in the projected record.
    pub nullable: bool,
    /// True when the field must be supplied by the caller.
    pub required: bool,
    /// Human readable description.
    pub description: String,
    /// Member fields of a nested group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<SchemaAttribute>,
}

impl SchemaAttribute {
    fn scalar(name: &str, value_type: SchemaType, description: &str) -> Self {
        SchemaAttribute {
            name: name.to_string(),
            value_type,
            nullable: true,
            required: false,
            description: description.to_string(),
            attributes: vec![],
        }
    }

    fn object(name: &str, description: &str, attributes: Vec<SchemaAttribute>) -> Self {
        SchemaAttribute {
            name: name.to_string(),
            value_type: SchemaType::Object,
            nullable: true,
            required: false,
            description: description.to_string(),
            attributes,
        }
    }
}

fn basic_identity_attributes() -> Vec<SchemaAttribute> {
    vec![
        SchemaAttribute::scalar("id", SchemaType::Number, "Personio Employee ID"),
        SchemaAttribute::scalar("email", SchemaType::String, "Email address of the employee"),
        SchemaAttribute::scalar("first_name", SchemaType::String, "First name"),
        SchemaAttribute::scalar("last_name", SchemaType::String, "Last name"),
    ]
}

fn profile_attributes() -> Vec<SchemaAttribute> {
    vec![
        SchemaAttribute::scalar("gender", SchemaType::String, "Gender"),
        SchemaAttribute::scalar("department", SchemaType::String, "Department name"),
        SchemaAttribute::scalar("department_id", SchemaType::Number, "Department ID"),
        SchemaAttribute::scalar("subcompany", SchemaType::String, "Subcompany"),
        SchemaAttribute::scalar("office", SchemaType::String, "Office name"),
        SchemaAttribute::scalar("team", SchemaType::String, "Team name"),
        SchemaAttribute::scalar("team_id", SchemaType::Number, "Team ID"),
        SchemaAttribute::object(
            "supervisor",
            "Supervisor of the employee",
            basic_identity_attributes(),
        ),
    ]
}

fn hr_attributes() -> Vec<SchemaAttribute> {
    vec![
        SchemaAttribute::scalar(
            "employment_type",
            SchemaType::String,
            "Employment type (`internal` or `external`)",
        ),
        SchemaAttribute::scalar("position", SchemaType::String, "Position of employee"),
        SchemaAttribute::scalar("hire_date", SchemaType::String, "Hire date"),
        SchemaAttribute::scalar("contract_end_date", SchemaType::String, "Contract end date"),
        SchemaAttribute::scalar(
            "last_working_day",
            SchemaType::String,
            "Last working day of employee",
        ),
        SchemaAttribute::scalar(
            "probation_period_end",
            SchemaType::String,
            "End of probation period",
        ),
        SchemaAttribute::scalar("termination_date", SchemaType::String, "Termination date"),
        SchemaAttribute::scalar(
            "termination_reason",
            SchemaType::String,
            "Termination reason",
        ),
        SchemaAttribute::scalar("termination_type", SchemaType::String, "Termination type"),
        SchemaAttribute::scalar(
            "vacation_day_balance",
            SchemaType::Float,
            "Vacation day balance",
        ),
        SchemaAttribute::scalar(
            "weekly_working_hours",
            SchemaType::Float,
            "Weekly working hours",
        ),
    ]
}

fn salary_attributes() -> Vec<SchemaAttribute> {
    vec![
        SchemaAttribute::scalar("fix_salary", SchemaType::Float, "Fixed salary amount"),
        SchemaAttribute::scalar(
            "fix_salary_interval",
            SchemaType::String,
            "Fixed salary interval",
        ),
        SchemaAttribute::scalar("hourly_salary", SchemaType::Float, "Hourly salary amount"),
    ]
}

/// Full employee schema as declared to the consuming configuration system.
/// Enumerates every field of the typed record with its semantic type and
/// nullability.
pub fn employee_schema() -> Vec<SchemaAttribute> {
    let mut attributes = basic_identity_attributes();
    attributes.extend(vec![
        SchemaAttribute::scalar(
            "status",
            SchemaType::String,
            "Status of the employee (active,...)",
        ),
        SchemaAttribute::scalar(
            "created_at",
            SchemaType::String,
            "Creation date of the employee record",
        ),
        SchemaAttribute::scalar(
            "last_modified_at",
            SchemaType::String,
            "Last modification date of employee record",
        ),
        SchemaAttribute::object(
            "profile",
            "Public profile attributes of an employee",
            profile_attributes(),
        ),
        SchemaAttribute::object("hr_info", "HR Information about the employee", hr_attributes()),
        SchemaAttribute::object(
            "salary_data",
            "Salary data of the employee",
            salary_attributes(),
        ),
        SchemaAttribute::scalar(
            "dynamic_attributes",
            SchemaType::StringMap,
            "Additional dynamic attributes of the employee.",
        ),
        SchemaAttribute::scalar(
            "tag_attributes",
            SchemaType::StringListMap,
            "Attributes of the employee that are stored as multi-select from a predefined list.",
        ),
    ]);
    attributes
}

/// Employee schema for the single-record read, where the caller supplies
/// the id.
pub fn single_employee_schema() -> Vec<SchemaAttribute> {
    let mut attributes = employee_schema();
    if let Some(id) = attributes.iter_mut().find(|attr| attr.name == "id") {
        id.nullable = false;
        id.required = true;
    }
    attributes
}
