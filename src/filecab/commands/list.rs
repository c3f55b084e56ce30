use crate::cabinet::RecordCabinet;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::validation::RecordValidator;

pub fn run<V: RecordValidator>(cabinet: &RecordCabinet<V>) -> Result<CmdResult> {
    let records = cabinet.records().to_vec();

    let mut result = CmdResult::default().with_listed_records(records);
    if result.listed_records.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result)
}
