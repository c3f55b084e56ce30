use crate::cabinet::RecordCabinet;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecordId, RecordInput};
use crate::validation::RecordValidator;

pub fn run<V: RecordValidator>(
    cabinet: &mut RecordCabinet<V>,
    id: RecordId,
    input: RecordInput,
) -> Result<CmdResult> {
    cabinet.edit_record(id, input)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record #{} updated.", id)));
    Ok(result)
}
