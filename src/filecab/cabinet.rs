//! The indexed record store.
//!
//! [`RecordCabinet`] owns the authoritative record list and keeps three
//! secondary indexes (first name, last name, date of birth) in lock-step with
//! every mutation. Index buckets hold record ids, not record copies: ids are
//! stable and never reused, so a bucket entry can always be resolved against
//! the primary list on read and there is no aliased state to keep in sync.
//!
//! Every mutating operation is all-or-nothing. Validation runs before any
//! state is touched; a failed call leaves the primary list and all three
//! indexes exactly as they were.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{CabinetError, Result};
use crate::model::{Record, RecordId, RecordInput};
use crate::snapshot::CabinetSnapshot;
use crate::validation::RecordValidator;

pub struct RecordCabinet<V: RecordValidator> {
    records: Vec<Record>,
    first_name_index: HashMap<String, Vec<RecordId>>,
    last_name_index: HashMap<String, Vec<RecordId>>,
    date_of_birth_index: HashMap<NaiveDate, Vec<RecordId>>,
    validator: V,
}

impl<V: RecordValidator> RecordCabinet<V> {
    pub fn new(validator: V) -> Self {
        Self {
            records: Vec::new(),
            first_name_index: HashMap::new(),
            last_name_index: HashMap::new(),
            date_of_birth_index: HashMap::new(),
            validator,
        }
    }

    /// Validates the input and, on success, appends a new record under the
    /// next sequential id and indexes it under all three keys.
    pub fn create_record(&mut self, input: RecordInput) -> Result<RecordId> {
        self.validator.validate(&input)?;

        let id = self.records.len() as RecordId + 1;
        let record = Record::from_input(id, input);

        index_insert(&mut self.first_name_index, name_key(&record.first_name), id);
        index_insert(&mut self.last_name_index, name_key(&record.last_name), id);
        index_insert(&mut self.date_of_birth_index, record.date_of_birth, id);
        self.records.push(record);

        Ok(id)
    }

    /// Overwrites every field of an existing record except its id.
    ///
    /// Validation runs before the lookup, matching the creation path: a
    /// malformed input is reported as such even when the id does not exist.
    /// The record is removed from each index under its old keys before the
    /// fields change, then re-inserted under the new ones, so no bucket ever
    /// holds an entry its record no longer matches.
    pub fn edit_record(&mut self, id: RecordId, input: RecordInput) -> Result<()> {
        self.validator.validate(&input)?;

        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(CabinetError::RecordNotFound(id))?;

        let old_first = name_key(&self.records[pos].first_name);
        let old_last = name_key(&self.records[pos].last_name);
        let old_dob = self.records[pos].date_of_birth;

        index_remove(&mut self.first_name_index, &old_first, id);
        index_remove(&mut self.last_name_index, &old_last, id);
        index_remove(&mut self.date_of_birth_index, &old_dob, id);

        self.records[pos].apply_input(input);

        let record = &self.records[pos];
        index_insert(&mut self.first_name_index, name_key(&record.first_name), id);
        index_insert(&mut self.last_name_index, name_key(&record.last_name), id);
        index_insert(&mut self.date_of_birth_index, record.date_of_birth, id);

        Ok(())
    }

    /// Case-insensitive exact match on first name. Empty when the key is
    /// absent, never an error.
    pub fn find_by_first_name(&self, first_name: &str) -> Vec<Record> {
        self.resolve(self.first_name_index.get(&name_key(first_name)))
    }

    /// Case-insensitive exact match on last name.
    pub fn find_by_last_name(&self, last_name: &str) -> Vec<Record> {
        self.resolve(self.last_name_index.get(&name_key(last_name)))
    }

    /// Exact date match.
    pub fn find_by_date_of_birth(&self, date_of_birth: NaiveDate) -> Vec<Record> {
        self.resolve(self.date_of_birth_index.get(&date_of_birth))
    }

    /// The full primary list in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Captures an independent copy of the record list. Later mutations of
    /// the cabinet are not observable through the snapshot.
    pub fn make_snapshot(&self) -> CabinetSnapshot {
        CabinetSnapshot::new(self.records.clone())
    }

    fn resolve(&self, bucket: Option<&Vec<RecordId>>) -> Vec<Record> {
        // Ids are assigned from the list position and records are never
        // deleted, so id - 1 indexes the primary list directly.
        bucket
            .map(|ids| {
                ids.iter()
                    .filter_map(|&id| self.records.get(id as usize - 1))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

fn index_insert<K: std::hash::Hash + Eq>(
    index: &mut HashMap<K, Vec<RecordId>>,
    key: K,
    id: RecordId,
) {
    index.entry(key).or_default().push(id);
}

fn index_remove<K: std::hash::Hash + Eq>(
    index: &mut HashMap<K, Vec<RecordId>>,
    key: &K,
    id: RecordId,
) {
    if let Some(bucket) = index.get_mut(key) {
        bucket.retain(|&entry| entry != id);
    }
}
