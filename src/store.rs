use std::sync::RwLock;

use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;

#[derive(Default)]
struct StoreState {
    employees: Vec<Employee>,
    records: Vec<AttendanceRecord>,
}

/// In-memory batch store. An upload replaces the whole previous batch in
/// one write-lock swap. Readers only ever see a complete batch, and two
/// ingests cannot interleave their writes.
pub struct AttendanceStore {
    inner: RwLock<StoreState>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState::default()),
        }
    }

    /// Swap in a fully built batch. Callers must finish all derivation
    /// before calling; nothing partial ever enters the store.
    pub fn replace(&self, employees: Vec<Employee>, records: Vec<AttendanceRecord>) {
        let mut state = self.inner.write().unwrap();
        state.employees = employees;
        state.records = records;
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.inner.read().unwrap().employees.clone()
    }

    /// Consistent view of the current batch for dashboard aggregation.
    pub fn snapshot(&self) -> (Vec<Employee>, Vec<AttendanceRecord>) {
        let state = self.inner.read().unwrap();
        (state.employees.clone(), state.records.clone())
    }

    /// One employee plus their records, date-ascending, or `None` when the
    /// name is not part of the current batch.
    pub fn employee(&self, name: &str) -> Option<(Employee, Vec<AttendanceRecord>)> {
        let state = self.inner.read().unwrap();
        let employee = state.employees.iter().find(|e| e.name == name)?.clone();
        let mut records: Vec<AttendanceRecord> = state
            .records
            .iter()
            .filter(|r| r.employee_name == name)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Some((employee, records))
    }
}

impl Default for AttendanceStore {
    fn default() -> Self {
        Self::new()
    }
}
