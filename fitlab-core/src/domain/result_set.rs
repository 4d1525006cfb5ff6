//! The records of one search, indexed by id.

use std::collections::HashMap;

use super::Exercise;

/// Records from the most recent search, in catalog order.
///
/// The id index is built once when the set is created. If the catalog
/// repeats an id, the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    records: Vec<Exercise>,
    by_id: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new(records: Vec<Exercise>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (i, ex) in records.iter().enumerate() {
            by_id.entry(ex.id.clone()).or_insert(i);
        }
        Self { records, by_id }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Exercise] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Exercise> {
        self.records.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Exercise> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }
}
