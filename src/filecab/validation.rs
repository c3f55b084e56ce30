//! Record validation policies.
//!
//! A policy is a pure predicate over a candidate [`RecordInput`] plus today's
//! date; it never touches cabinet state. Exactly two rule sets exist, chosen
//! once at cabinet construction:
//!
//! - [`DefaultValidator`] — the lenient rules (date-of-birth floor 1950-01-01).
//! - [`CustomValidator`] — the strict rules (uppercase first letter required,
//!   floor relaxed to 1900-01-01 to allow older people).

use chrono::{NaiveDate, Utc};

use crate::error::{CabinetError, Result};
use crate::model::RecordInput;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 60;

pub trait RecordValidator {
    fn validate(&self, input: &RecordInput) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultValidator;

#[derive(Debug, Default, Clone, Copy)]
pub struct CustomValidator;

impl RecordValidator for DefaultValidator {
    fn validate(&self, input: &RecordInput) -> Result<()> {
        validate_name("first name", &input.first_name)?;
        validate_name("last name", &input.last_name)?;
        validate_date_of_birth(input.date_of_birth, lenient_floor())
    }
}

impl RecordValidator for CustomValidator {
    fn validate(&self, input: &RecordInput) -> Result<()> {
        validate_name("first name", &input.first_name)?;
        if !input
            .first_name
            .chars()
            .next()
            .is_some_and(|c| c.is_uppercase())
        {
            return Err(CabinetError::validation(
                "first name",
                "must start with an uppercase letter",
            ));
        }
        validate_name("last name", &input.last_name)?;
        validate_date_of_birth(input.date_of_birth, strict_floor())
    }
}

fn lenient_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap()
}

fn strict_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

fn validate_name(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CabinetError::validation(field, "must not be empty"));
    }
    let len = value.chars().count();
    if len < NAME_MIN_LEN {
        return Err(CabinetError::validation(
            field,
            format!("too short, minimum {} symbols", NAME_MIN_LEN),
        ));
    }
    if len > NAME_MAX_LEN {
        return Err(CabinetError::validation(
            field,
            format!("too long, maximum {} symbols", NAME_MAX_LEN),
        ));
    }
    Ok(())
}

fn validate_date_of_birth(date: NaiveDate, floor: NaiveDate) -> Result<()> {
    if date < floor {
        return Err(CabinetError::validation(
            "date of birth",
            format!("must not be before {}", floor.format("%m/%d/%Y")),
        ));
    }
    if date > Utc::now().date_naive() {
        return Err(CabinetError::validation(
            "date of birth",
            "must not be in the future",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use rust_decimal_macros::dec;

    fn input(first: &str, last: &str, dob: (i32, u32, u32)) -> RecordInput {
        RecordInput {
            first_name: first.into(),
            last_name: last.into(),
            date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
            age: 30,
            salary: dec!(1000.00),
            gender: Gender::Female,
        }
    }

    #[test]
    fn default_accepts_plain_input() {
        assert!(DefaultValidator
            .validate(&input("John", "Smith", (1990, 5, 1)))
            .is_ok());
    }

    #[test]
    fn rejects_short_and_long_names() {
        assert!(DefaultValidator
            .validate(&input("A", "Smith", (1990, 5, 1)))
            .is_err());
        let long = "x".repeat(61);
        assert!(DefaultValidator
            .validate(&input("John", &long, (1990, 5, 1)))
            .is_err());
    }

    #[test]
    fn rejects_whitespace_only_name() {
        let err = DefaultValidator
            .validate(&input("   ", "Smith", (1990, 5, 1)))
            .unwrap_err();
        assert!(err.to_string().contains("first name"));
    }

    #[test]
    fn name_length_counts_chars_not_bytes() {
        // Two-char name, multi-byte encoding.
        assert!(DefaultValidator
            .validate(&input("Ая", "Smith", (1990, 5, 1)))
            .is_ok());
    }

    #[test]
    fn default_floor_is_1950() {
        assert!(DefaultValidator
            .validate(&input("John", "Smith", (1949, 12, 31)))
            .is_err());
        assert!(DefaultValidator
            .validate(&input("John", "Smith", (1950, 1, 1)))
            .is_ok());
    }

    #[test]
    fn custom_floor_is_1900() {
        assert!(CustomValidator
            .validate(&input("John", "Smith", (1920, 6, 15)))
            .is_ok());
        assert!(CustomValidator
            .validate(&input("John", "Smith", (1899, 12, 31)))
            .is_err());
    }

    #[test]
    fn rejects_future_date() {
        let tomorrow = Utc::now().date_naive() + chrono::Days::new(1);
        let mut i = input("John", "Smith", (1990, 5, 1));
        i.date_of_birth = tomorrow;
        assert!(DefaultValidator.validate(&i).is_err());
        assert!(CustomValidator.validate(&i).is_err());
    }

    #[test]
    fn custom_requires_uppercase_first_letter() {
        assert!(CustomValidator
            .validate(&input("john", "Smith", (1990, 5, 1)))
            .is_err());
        assert!(CustomValidator
            .validate(&input("John", "smith", (1990, 5, 1)))
            .is_ok());
        assert!(DefaultValidator
            .validate(&input("john", "Smith", (1990, 5, 1)))
            .is_ok());
    }
}
