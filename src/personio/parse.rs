use serde_json::Value;

use crate::personio::employee::RawEmployee;

/// Surface the error message of an unsuccessful Personio response envelope.
fn ensure_success(json: &Value) -> Result<(), String> {
    match json.get("success").and_then(Value::as_bool) {
        Some(false) => {
            let message = json
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            Err(format!("Personio API error: {}", message))
        }
        _ => Ok(()),
    }
}

/// Parse a single employee from a Personio response envelope.
pub(crate) fn parse_employee_from_response(json: &Value) -> Result<RawEmployee, String> {
    ensure_success(json)?;

    let data = json
        .as_object()
        .ok_or_else(|| "Invalid response from Personio".to_string())?
        .get("data")
        .ok_or_else(|| "Invalid response from Personio".to_string())?;

    parse_employee(data)
}

/// Parse employees from a Personio list response envelope.
pub(crate) fn parse_employees_from_response(json: &Value) -> Result<Vec<RawEmployee>, String> {
    ensure_success(json)?;

    let response_array = json
        .as_object()
        .ok_or_else(|| "Invalid response from Personio".to_string())?
        .get("data")
        .ok_or_else(|| "Invalid response from Personio".to_string())?
        .as_array()
        .ok_or_else(|| "Invalid response from Personio".to_string())?;

    let mut employees: Vec<RawEmployee> = vec![];

    for record_value in response_array {
        employees.push(parse_employee(record_value)?);
    }

    Ok(employees)
}

/// Convert one employee envelope entry into its raw attribute bag.
fn parse_employee(record_value: &Value) -> Result<RawEmployee, String> {
    let record = record_value
        .as_object()
        .ok_or_else(|| "Invalid response from Personio".to_string())?
        .get("attributes")
        .ok_or_else(|| "Invalid response from Personio".to_string())?
        .as_object()
        .ok_or_else(|| "Invalid response from Personio".to_string())?;

    let mut employee = RawEmployee::new();

    for (key, value) in record {
        let attribute = serde_json::from_value(value.clone())
            .map_err(|_| "Invalid response from Personio".to_string())?;
        employee.attributes.insert(key.clone(), attribute);
    }

    Ok(employee)
}
