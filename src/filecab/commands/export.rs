use std::fs::File;
use std::path::Path;

use crate::cabinet::RecordCabinet;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CabinetError, Result};
use crate::export::ExportFormat;
use crate::validation::RecordValidator;

/// Takes a snapshot and writes it to `path` in the requested format. The
/// snapshot decouples the file write from the live cabinet; what lands on
/// disk is the record set as of the moment this call started.
pub fn run<V: RecordValidator>(
    cabinet: &RecordCabinet<V>,
    format: ExportFormat,
    path: &Path,
) -> Result<CmdResult> {
    let snapshot = cabinet.make_snapshot();
    let file = File::create(path).map_err(CabinetError::Io)?;

    match format {
        ExportFormat::Csv => snapshot.save_to_csv(file)?,
        ExportFormat::Json => snapshot.save_to_json(file)?,
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} record(s) exported to {}.",
        snapshot.records().len(),
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, RecordInput};
    use crate::validation::DefaultValidator;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn populated() -> RecordCabinet<DefaultValidator> {
        let mut cab = RecordCabinet::new(DefaultValidator);
        cab.create_record(RecordInput {
            first_name: "John".into(),
            last_name: "Smith".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            age: 34,
            salary: dec!(1000.00),
            gender: Gender::Male,
        })
        .unwrap();
        cab
    }

    #[test]
    fn writes_csv_file() {
        let cab = populated();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");

        run(&cab, ExportFormat::Csv, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Id,First Name"));
        assert!(text.contains("1,John,Smith,05/01/1990,34,1000.00,M"));
    }

    #[test]
    fn writes_json_file() {
        let cab = populated();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        run(&cab, ExportFormat::Json, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let cab = populated();
        let err = run(&cab, ExportFormat::Csv, Path::new("/no/such/dir/out.csv")).unwrap_err();
        assert!(matches!(err, CabinetError::Io(_)));
    }
}
