/// Raw attribute wire model and the declared type tag union.
pub mod attribute;
/// Credential and endpoint configuration.
pub mod config;
/// Attribute value coercion, composite extraction and tag splitting.
pub mod convert;
/// Read boundaries handed to the consuming configuration system.
pub mod datasource;
/// Raw and typed employee records plus record assembly.
pub mod employee;
/// Post-processing transforms applied to dynamic attributes.
pub mod formatter;
pub(crate) mod parse;
/// Outbound schema declaration of the typed employee record.
pub mod schema;
/// HTTP client for Personio Web API operations.
pub mod serviceclient;
