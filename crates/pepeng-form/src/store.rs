//! Append-only record store.

use pepeng_types::{ShipmentId, ShipmentRecord};
use serde::Serialize;

/// Ordered list of every recorded shipment.
///
/// Records are appended at the end and never reordered, deduplicated,
/// updated or removed. The store lives only as long as its owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<ShipmentRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record and returns it.
    pub(crate) fn append(&mut self, record: ShipmentRecord) -> &ShipmentRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Returns all records in submission order.
    #[must_use]
    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    /// Returns an iterator over records in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, ShipmentRecord> {
        self.records.iter()
    }

    /// Returns the record at `index` (0 is the first submitted).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ShipmentRecord> {
        self.records.get(index)
    }

    /// Returns the most recently submitted record.
    #[must_use]
    pub fn last(&self) -> Option<&ShipmentRecord> {
        self.records.last()
    }

    /// Returns every record carrying `id`, in submission order.
    pub fn with_id(&self, id: ShipmentId) -> impl Iterator<Item = &ShipmentRecord> + '_ {
        self.records.iter().filter(move |record| record.id() == id)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a ShipmentRecord;
    type IntoIter = std::slice::Iter<'a, ShipmentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
