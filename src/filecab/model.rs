use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned record identifier. Sequential from 1, never reused.
pub type RecordId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_char(self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
            Gender::Other => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(Gender::Male),
            'F' => Some(Gender::Female),
            'O' => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Gender::from_char(c).ok_or_else(|| "Gender must be 'M', 'F' or 'O'".to_string())
            }
            _ => Err("Please enter a single character".to_string()),
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let c = char::deserialize(deserializer)?;
        Gender::from_char(c)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown gender '{}'", c)))
    }
}

/// A single persisted person entry. Owned exclusively by the cabinet;
/// callers only ever see clones or shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub age: u16,
    pub salary: Decimal,
    pub gender: Gender,
}

/// Everything a record carries except its id. The only shape accepted by
/// create/edit — id assignment belongs to the cabinet alone.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInput {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub age: u16,
    pub salary: Decimal,
    pub gender: Gender,
}

impl Record {
    pub fn from_input(id: RecordId, input: RecordInput) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            date_of_birth: input.date_of_birth,
            age: input.age,
            salary: input.salary,
            gender: input.gender,
        }
    }

    /// Overwrites every field except the id.
    pub fn apply_input(&mut self, input: RecordInput) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.date_of_birth = input.date_of_birth;
        self.age = input.age;
        self.salary = input.salary;
        self.gender = input.gender;
    }
}
