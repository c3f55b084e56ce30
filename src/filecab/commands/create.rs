use crate::cabinet::RecordCabinet;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordInput;
use crate::validation::RecordValidator;

pub fn run<V: RecordValidator>(
    cabinet: &mut RecordCabinet<V>,
    input: RecordInput,
) -> Result<CmdResult> {
    let id = cabinet.create_record(input)?;

    let mut result = CmdResult::default().with_created_id(id);
    result.add_message(CmdMessage::success(format!("Record #{} created.", id)));
    Ok(result)
}
