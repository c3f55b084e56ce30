use std::io::Write;

use crate::error::Result;
use crate::model::Record;

const HEADER: &str = "Id,First Name,Last Name,Date of Birth,Age,Salary,Gender";

/// Writes a header line followed by one line per record.
pub fn write<W: Write>(mut writer: W, records: &[Record]) -> Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for record in records {
        write_record(&mut writer, record)?;
    }
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, record: &Record) -> Result<()> {
    writeln!(
        writer,
        "{},{},{},{},{},{},{}",
        record.id,
        record.first_name,
        record.last_name,
        record.date_of_birth.format("%m/%d/%Y"),
        record.age,
        record.salary,
        record.gender,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(id: u32, first: &str) -> Record {
        Record {
            id,
            first_name: first.into(),
            last_name: "Smith".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            age: 34,
            salary: dec!(1000.00),
            gender: Gender::Male,
        }
    }

    #[test]
    fn writes_header_and_fixed_field_order() {
        let mut buf = Vec::new();
        write(&mut buf, &[record(1, "John")]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Id,First Name,Last Name,Date of Birth,Age,Salary,Gender"
        );
        assert_eq!(lines.next().unwrap(), "1,John,Smith,05/01/1990,34,1000.00,M");
        assert!(lines.next().is_none());
    }

    #[test]
    fn preserves_record_order() {
        let mut buf = Vec::new();
        write(&mut buf, &[record(1, "John"), record(2, "Jane")]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("1,John"));
        assert!(lines[2].starts_with("2,Jane"));
    }

    #[test]
    fn empty_snapshot_writes_header_only() {
        let mut buf = Vec::new();
        write(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
