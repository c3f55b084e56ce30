use std::io::Write;

use crate::error::Result;
use crate::model::Record;

/// Writes the records as a pretty-printed JSON array.
pub fn write<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}
