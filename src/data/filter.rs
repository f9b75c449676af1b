use anyhow::Result;

use super::model::{Dataset, DescriptorColumns};

// ---------------------------------------------------------------------------
// Closed interval
// ---------------------------------------------------------------------------

/// `[min, max]`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Bounds { min, max }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// Range bound on the two descriptor columns. Rows outside either interval
/// are dropped without an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    pub donors: Bounds,
    pub acceptors: Bounds,
}

impl RangeFilter {
    /// Donors in `[0, 5]`, acceptors in `[0, 10]`.
    pub const LIPINSKI: RangeFilter = RangeFilter {
        donors: Bounds::new(0.0, 5.0),
        acceptors: Bounds::new(0.0, 10.0),
    };

    pub fn accepts(&self, donors: f64, acceptors: f64) -> bool {
        self.donors.contains(donors) && self.acceptors.contains(acceptors)
    }

    /// Keep the records whose descriptors fall inside both intervals.
    ///
    /// Empty cells fail the comparison and are dropped. A non-numeric value
    /// in either descriptor column aborts with an error.
    pub fn apply(&self, dataset: Dataset, columns: DescriptorColumns) -> Result<Dataset> {
        let Dataset { columns: names, records } = dataset;
        let total = records.len();

        let mut retained = Vec::with_capacity(total);
        for (row, record) in records.into_iter().enumerate() {
            match columns.read(&record, row)? {
                Some((donors, acceptors)) if self.accepts(donors, acceptors) => {
                    retained.push(record);
                }
                _ => {}
            }
        }

        log::debug!(
            "Range filter kept {} of {total} rows ({} dropped)",
            retained.len(),
            total - retained.len()
        );

        Ok(Dataset {
            columns: names,
            records: retained,
        })
    }
}
