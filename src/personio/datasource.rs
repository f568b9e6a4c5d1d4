use log::trace;

use crate::personio::employee::EmployeeRecord;
use crate::personio::formatter::FormatterCollection;
use crate::personio::serviceclient::ServiceClient;

/// Reads one employee by Personio ID for the consuming configuration
/// system.
pub struct EmployeeDataSource<'a> {
    client: &'a ServiceClient,
}

impl<'a> EmployeeDataSource<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        EmployeeDataSource { client }
    }

    /// Fetch and project a single employee record.
    pub async fn read(&self, id: i64) -> Result<EmployeeRecord, String> {
        self.read_with_formatters(id, &FormatterCollection::new())
            .await
    }

    /// Fetch and project a single employee record, then apply the
    /// configured formatters to its dynamic attributes.
    pub async fn read_with_formatters(
        &self,
        id: i64,
        formatters: &FormatterCollection,
    ) -> Result<EmployeeRecord, String> {
        let raw = self.client.get_employee(id).await?;
        let mut record = EmployeeRecord::from_raw(&raw);
        record.apply_formatters(formatters);

        trace!("Read employee {}", id);
        Ok(record)
    }
}

/// Reads the full employee list for the consuming configuration system.
pub struct EmployeesDataSource<'a> {
    client: &'a ServiceClient,
}

impl<'a> EmployeesDataSource<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        EmployeesDataSource { client }
    }

    /// Fetch and project every employee record.
    pub async fn read(&self) -> Result<Vec<EmployeeRecord>, String> {
        self.read_with_formatters(&FormatterCollection::new()).await
    }

    /// Fetch and project every employee record, then apply the configured
    /// formatters to each record's dynamic attributes. The formatter
    /// configuration is shared read-only across all records of the read.
    pub async fn read_with_formatters(
        &self,
        formatters: &FormatterCollection,
    ) -> Result<Vec<EmployeeRecord>, String> {
        let raw = self.client.get_employees().await?;

        let mut records: Vec<EmployeeRecord> = raw.iter().map(EmployeeRecord::from_raw).collect();
        for record in &mut records {
            record.apply_formatters(formatters);
        }

        trace!("Read {} employees", records.len());
        Ok(records)
    }
}
