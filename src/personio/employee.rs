use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::personio::attribute::{Attribute, AttributeKind};
use crate::personio::convert::{
    attr_to_any_string, attr_to_date_string, attr_to_float, attr_to_int, attr_to_string,
    attr_to_tags, extract_supervisor, map_item_to_int, map_item_to_string,
};
use crate::personio::formatter::FormatterCollection;

/// Keys of tenant-defined attributes carry this prefix.
pub const DYNAMIC_ATTRIBUTE_PREFIX: &str = "dynamic_";

/// Employee record as returned by the Personio API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEmployee {
    /// Attribute map keyed by well-known or `dynamic_` names.
    pub attributes: HashMap<String, Attribute>,
}

impl RawEmployee {
    /// Create a new empty employee record.
    pub fn new() -> Self {
        RawEmployee {
            attributes: HashMap::new(),
        }
    }

    fn string_attr(&self, key: &str) -> Option<String> {
        self.attributes.get(key).and_then(attr_to_string)
    }

    fn int_attr(&self, key: &str) -> Option<i64> {
        self.attributes.get(key).and_then(attr_to_int)
    }

    fn float_attr(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(attr_to_float)
    }

    fn date_attr(&self, key: &str) -> Option<String> {
        self.attributes.get(key).and_then(attr_to_date_string)
    }

    fn map_string_attr(&self, key: &str, item_key: &str) -> Option<String> {
        self.attributes
            .get(key)
            .and_then(|attr| map_item_to_string(attr, item_key))
    }

    fn map_int_attr(&self, key: &str, item_key: &str) -> Option<i64> {
        self.attributes
            .get(key)
            .and_then(|attr| map_item_to_int(attr, item_key))
    }

    fn supervisor_attr(&self, key: &str) -> Option<Supervisor> {
        self.attributes.get(key).and_then(extract_supervisor)
    }
}

/// Nested identity record of the direct supervisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supervisor {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Supervisor {
    pub(crate) fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}

/// Public profile attributes of an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub gender: Option<String>,
    pub department: Option<String>,
    pub department_id: Option<i64>,
    pub subcompany: Option<String>,
    pub office: Option<String>,
    pub team: Option<String>,
    pub team_id: Option<i64>,
    pub supervisor: Option<Supervisor>,
}

impl Profile {
    fn is_empty(&self) -> bool {
        self.gender.is_none()
            && self.department.is_none()
            && self.department_id.is_none()
            && self.subcompany.is_none()
            && self.office.is_none()
            && self.team.is_none()
            && self.team_id.is_none()
            && self.supervisor.is_none()
    }
}

/// HR information about an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrInfo {
    pub employment_type: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<String>,
    pub contract_end_date: Option<String>,
    pub last_working_day: Option<String>,
    pub probation_period_end: Option<String>,
    pub termination_date: Option<String>,
    pub termination_reason: Option<String>,
    pub termination_type: Option<String>,
    pub vacation_day_balance: Option<f64>,
    pub weekly_working_hours: Option<f64>,
}

impl HrInfo {
    fn is_empty(&self) -> bool {
        self.employment_type.is_none()
            && self.position.is_none()
            && self.hire_date.is_none()
            && self.contract_end_date.is_none()
            && self.last_working_day.is_none()
            && self.probation_period_end.is_none()
            && self.termination_date.is_none()
            && self.termination_reason.is_none()
            && self.termination_type.is_none()
            && self.vacation_day_balance.is_none()
            && self.weekly_working_hours.is_none()
    }
}

/// Salary data of an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryData {
    pub fix_salary: Option<f64>,
    pub fix_salary_interval: Option<String>,
    pub hourly_salary: Option<f64>,
}

impl SalaryData {
    fn is_empty(&self) -> bool {
        self.fix_salary.is_none()
            && self.fix_salary_interval.is_none()
            && self.hourly_salary.is_none()
    }
}

/// Typed projection of one Personio employee.
///
/// Every field is independently nullable; a field whose underlying
/// attribute is unreadable for the API credential stays `None`. The three
/// attribute groups are omitted entirely when every member is `None`, so
/// the consuming system never sees an all-null nested object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub last_modified_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_info: Option<HrInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_data: Option<SalaryData>,
    /// Dynamic attributes, string-coerced by declared type. Unreadable
    /// attributes keep their key with a `None` value.
    pub dynamic_attributes: BTreeMap<String, Option<String>>,
    /// Dynamic attributes stored as multi-select from a predefined list.
    pub tag_attributes: BTreeMap<String, Vec<String>>,
}

impl EmployeeRecord {
    /// Assemble the typed record from a raw attribute bag.
    ///
    /// Non-dynamic keys without a fixed-field mapping are dropped. Dynamic
    /// keys are partitioned by declared type: `tags` attributes land in
    /// `tag_attributes`, everything else in `dynamic_attributes`.
    pub fn from_raw(raw: &RawEmployee) -> Self {
        let profile = Profile {
            gender: raw.string_attr("gender"),
            department: raw.map_string_attr("department", "name"),
            department_id: raw.map_int_attr("department", "id"),
            subcompany: raw.string_attr("subcompany"),
            office: raw.map_string_attr("office", "name"),
            team: raw.map_string_attr("team", "name"),
            team_id: raw.map_int_attr("team", "id"),
            supervisor: raw.supervisor_attr("supervisor"),
        };

        let hr_info = HrInfo {
            employment_type: raw.string_attr("employment_type"),
            position: raw.string_attr("position"),
            hire_date: raw.date_attr("hire_date"),
            contract_end_date: raw.date_attr("contract_end_date"),
            last_working_day: raw.date_attr("last_working_day"),
            probation_period_end: raw.date_attr("probation_period_end"),
            termination_date: raw.date_attr("termination_date"),
            termination_reason: raw.string_attr("termination_reason"),
            termination_type: raw.string_attr("termination_type"),
            vacation_day_balance: raw.float_attr("vacation_day_balance"),
            weekly_working_hours: raw.float_attr("weekly_working_hours"),
        };

        let salary_data = SalaryData {
            fix_salary: raw.float_attr("fix_salary"),
            fix_salary_interval: raw.string_attr("fix_salary_interval"),
            hourly_salary: raw.float_attr("hourly_salary"),
        };

        let mut dynamic_attributes = BTreeMap::new();
        let mut tag_attributes = BTreeMap::new();

        for (key, attr) in &raw.attributes {
            if !key.starts_with(DYNAMIC_ATTRIBUTE_PREFIX) {
                continue;
            }
            if attr.kind == AttributeKind::Tags {
                tag_attributes.insert(key.clone(), attr_to_tags(attr));
            } else {
                dynamic_attributes.insert(key.clone(), attr_to_any_string(attr));
            }
        }

        EmployeeRecord {
            id: raw.int_attr("id"),
            email: raw.string_attr("email"),
            first_name: raw.string_attr("first_name"),
            last_name: raw.string_attr("last_name"),
            status: raw.string_attr("status"),
            created_at: raw.date_attr("created_at"),
            last_modified_at: raw.date_attr("last_modified_at"),
            profile: if profile.is_empty() { None } else { Some(profile) },
            hr_info: if hr_info.is_empty() { None } else { Some(hr_info) },
            salary_data: if salary_data.is_empty() {
                None
            } else {
                Some(salary_data)
            },
            dynamic_attributes,
            tag_attributes,
        }
    }

    /// Apply the configured formatters to the dynamic attributes. Every
    /// other field is left untouched.
    pub fn apply_formatters(&mut self, formatters: &FormatterCollection) {
        formatters.format_all(&mut self.dynamic_attributes);
    }
}
