//! Transit table with fixed days per courier.

use pepeng_types::Courier;

/// Transit days assumed for a courier code the table does not know.
pub const FALLBACK_TRANSIT_DAYS: u32 = 3;

/// Static transit table instance.
static TABLE: TransitTable = TransitTable::new();

/// Fixed transit days for every courier.
///
/// Entries are stored in [`Courier::all`] order, so a courier's position in
/// that list is its index here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitTable {
    entries: [(Courier, u32); 3],
}

impl TransitTable {
    /// Creates the transit table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [(Courier::Jne, 3), (Courier::Tiki, 2), (Courier::Pos, 5)],
        }
    }

    /// Returns the shared transit table.
    #[must_use]
    pub fn global() -> &'static Self {
        &TABLE
    }

    /// Returns the transit days for a courier.
    #[must_use]
    pub const fn days(&self, courier: Courier) -> u32 {
        self.entries[courier as usize].1
    }

    /// Looks up an exact courier code (`"JNE"`, `"TIKI"`, `"POS"`).
    ///
    /// Codes are case-sensitive and untrimmed: `"tiki"` or `" JNE"` are not
    /// in the table.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(courier, _)| courier.as_str() == code)
            .map(|&(_, days)| days)
    }

    /// Looks up a courier code, falling back to [`FALLBACK_TRANSIT_DAYS`].
    #[must_use]
    pub fn get_or_fallback(&self, code: &str) -> u32 {
        self.get(code).unwrap_or(FALLBACK_TRANSIT_DAYS)
    }

    /// Returns all table entries in picker order.
    pub fn entries(&self) -> impl Iterator<Item = (Courier, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the number of couriers in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TransitTable {
    fn default() -> Self {
        Self::new()
    }
}
