use std::io::Write;

use crate::error::Result;
use crate::export;
use crate::model::Record;

/// A time-frozen copy of the cabinet's record list, taken for export.
/// Exposes no mutation; the order is the cabinet's insertion order at
/// capture time.
#[derive(Debug, Clone)]
pub struct CabinetSnapshot {
    records: Vec<Record>,
}

impl CabinetSnapshot {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn save_to_csv<W: Write>(&self, writer: W) -> Result<()> {
        export::csv::write(writer, &self.records)
    }

    pub fn save_to_json<W: Write>(&self, writer: W) -> Result<()> {
        export::json::write(writer, &self.records)
    }
}
