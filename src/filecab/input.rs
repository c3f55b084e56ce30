//! String-to-field converters for interactive input.
//!
//! These run at prompt time, before a value ever reaches the cabinet, and
//! return the reason string the REPL shows when asking the user to retry.
//! The cabinet's validation policy re-checks names and dates on its own
//! terms; age, salary, and gender bounds live only here, matching the
//! original prompt-level rules.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::Gender;

pub const AGE_MAX: u16 = 130;

pub fn parse_name(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Empty string".to_string());
    }
    let len = trimmed.chars().count();
    if len < 2 {
        return Err("Name too short. Minimum 2 symbols".to_string());
    }
    if len > 60 {
        return Err("Name too long. Maximum 60 symbols".to_string());
    }
    Ok(trimmed.to_string())
}

/// Accepts `MM/dd/yyyy` or ISO `yyyy-MM-dd`.
pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| "Invalid date format. Use MM/dd/yyyy or yyyy-MM-dd".to_string())
}

pub fn parse_age(input: &str) -> Result<u16, String> {
    let age: u16 = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid number".to_string())?;
    if age == 0 {
        return Err("Age must be positive".to_string());
    }
    if age > AGE_MAX {
        return Err(format!("Age must be less than or equal to {}", AGE_MAX));
    }
    Ok(age)
}

pub fn parse_salary(input: &str) -> Result<Decimal, String> {
    let salary: Decimal = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid number".to_string())?;
    if salary.is_sign_negative() {
        return Err("Salary must be a non-negative number".to_string());
    }
    Ok(salary)
}

pub fn parse_gender(input: &str) -> Result<Gender, String> {
    input.parse()
}
