use std::str::FromStr;

use crate::cabinet::RecordCabinet;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CabinetError, Result};
use crate::input;
use crate::validation::RecordValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FirstName,
    LastName,
    DateOfBirth,
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "firstname" => Ok(SearchField::FirstName),
            "lastname" => Ok(SearchField::LastName),
            "dateofbirth" => Ok(SearchField::DateOfBirth),
            other => Err(format!(
                "Unknown property '{}'. Use: firstname, lastname, dateofbirth",
                other
            )),
        }
    }
}

pub fn run<V: RecordValidator>(
    cabinet: &RecordCabinet<V>,
    field: SearchField,
    value: &str,
) -> Result<CmdResult> {
    let records = match field {
        SearchField::FirstName => cabinet.find_by_first_name(value),
        SearchField::LastName => cabinet.find_by_last_name(value),
        SearchField::DateOfBirth => {
            let date = input::parse_date(value).map_err(CabinetError::Api)?;
            cabinet.find_by_date_of_birth(date)
        }
    };

    let mut result = CmdResult::default().with_listed_records(records);
    if result.listed_records.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
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
    fn parses_search_fields() {
        assert_eq!(
            "FirstName".parse::<SearchField>().unwrap(),
            SearchField::FirstName
        );
        assert_eq!(
            "dateofbirth".parse::<SearchField>().unwrap(),
            SearchField::DateOfBirth
        );
        assert!("salary".parse::<SearchField>().is_err());
    }

    #[test]
    fn finds_by_each_field() {
        let cab = populated();
        assert_eq!(
            run(&cab, SearchField::FirstName, "john")
                .unwrap()
                .listed_records
                .len(),
            1
        );
        assert_eq!(
            run(&cab, SearchField::LastName, "SMITH")
                .unwrap()
                .listed_records
                .len(),
            1
        );
        assert_eq!(
            run(&cab, SearchField::DateOfBirth, "05/01/1990")
                .unwrap()
                .listed_records
                .len(),
            1
        );
    }

    #[test]
    fn bad_date_value_is_an_api_error() {
        let cab = populated();
        let err = run(&cab, SearchField::DateOfBirth, "yesterday").unwrap_err();
        assert!(matches!(err, CabinetError::Api(_)));
    }

    #[test]
    fn no_match_yields_info_message() {
        let cab = populated();
        let result = run(&cab, SearchField::FirstName, "Nobody").unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
