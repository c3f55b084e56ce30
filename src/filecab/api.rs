//! # API Facade
//!
//! A thin dispatch layer over the command modules — the single entry point
//! for every cabinet operation, regardless of the UI driving it. The facade
//! owns the cabinet, normalizes raw inputs (e.g. property names for `find`),
//! and returns structured [`CmdResult`] values. It never prints, never reads
//! stdin, and never exits the process; that is the CLI's job.

use std::path::Path;

use crate::cabinet::RecordCabinet;
use crate::commands;
use crate::error::{CabinetError, Result};
use crate::export::ExportFormat;
use crate::model::{RecordId, RecordInput};
use crate::snapshot::CabinetSnapshot;
use crate::validation::RecordValidator;

pub struct CabinetApi<V: RecordValidator> {
    cabinet: RecordCabinet<V>,
}

impl<V: RecordValidator> CabinetApi<V> {
    pub fn new(validator: V) -> Self {
        Self {
            cabinet: RecordCabinet::new(validator),
        }
    }

    pub fn create_record(&mut self, input: RecordInput) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.cabinet, input)
    }

    pub fn edit_record(&mut self, id: RecordId, input: RecordInput) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.cabinet, id, input)
    }

    pub fn find_records(&self, property: &str, value: &str) -> Result<commands::CmdResult> {
        let field = property.parse().map_err(CabinetError::Api)?;
        commands::find::run(&self.cabinet, field, value)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.cabinet)
    }

    pub fn stat(&self) -> Result<commands::CmdResult> {
        commands::stat::run(&self.cabinet)
    }

    pub fn export_records(&self, format: ExportFormat, path: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.cabinet, format, path)
    }

    pub fn make_snapshot(&self) -> CabinetSnapshot {
        self.cabinet.make_snapshot()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use crate::validation::DefaultValidator;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn input() -> RecordInput {
        RecordInput {
            first_name: "John".into(),
            last_name: "Smith".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            age: 34,
            salary: dec!(1000.00),
            gender: Gender::Male,
        }
    }

    #[test]
    fn dispatches_create_and_list() {
        let mut api = CabinetApi::new(DefaultValidator);
        let created = api.create_record(input()).unwrap();
        assert_eq!(created.created_id, Some(1));

        let listed = api.list_records().unwrap();
        assert_eq!(listed.listed_records.len(), 1);
    }

    #[test]
    fn snapshot_taken_through_facade_is_frozen() {
        let mut api = CabinetApi::new(DefaultValidator);
        api.create_record(input()).unwrap();

        let snapshot = api.make_snapshot();
        let mut second = input();
        second.first_name = "Jane".into();
        api.create_record(second).unwrap();

        assert_eq!(snapshot.records().len(), 1);
    }

    #[test]
    fn find_rejects_unknown_property() {
        let api: CabinetApi<DefaultValidator> = CabinetApi::new(DefaultValidator);
        let err = api.find_records("salary", "1000").unwrap_err();
        assert!(matches!(err, CabinetError::Api(_)));
    }

    #[test]
    fn find_dispatches_case_insensitive_search() {
        let mut api = CabinetApi::new(DefaultValidator);
        api.create_record(input()).unwrap();
        let found = api.find_records("lastname", "smith").unwrap();
        assert_eq!(found.listed_records.len(), 1);
    }
}
