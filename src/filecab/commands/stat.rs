use crate::cabinet::RecordCabinet;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::validation::RecordValidator;

pub fn run<V: RecordValidator>(cabinet: &RecordCabinet<V>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("{} record(s).", cabinet.len())));
    Ok(result)
}
