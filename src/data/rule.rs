use anyhow::Result;

use super::model::{CellValue, Dataset, DescriptorColumns, RULE_COLUMN};

// ---------------------------------------------------------------------------
// Compliance rule
// ---------------------------------------------------------------------------

/// Strict upper thresholds on the two descriptors.
///
/// The range filter admits the threshold values themselves (`donors == 5`,
/// `acceptors == 10`); those rows are kept but flagged as non-compliant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub donors_below: f64,
    pub acceptors_below: f64,
}

impl Rule {
    /// Fewer than 5 donors and fewer than 10 acceptors.
    pub const LIPINSKI: Rule = Rule {
        donors_below: 5.0,
        acceptors_below: 10.0,
    };

    pub fn is_compliant(&self, donors: f64, acceptors: f64) -> bool {
        donors < self.donors_below && acceptors < self.acceptors_below
    }

    /// Write the `Cumple_Regla` column (1 compliant, 0 otherwise).
    /// An existing column of that name is overwritten in place.
    pub fn derive(&self, dataset: &mut Dataset, columns: DescriptorColumns) -> Result<()> {
        let flags = dataset
            .records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let compliant = columns
                    .read(record, row)?
                    .is_some_and(|(d, a)| self.is_compliant(d, a));
                Ok(CellValue::Integer(compliant.into()))
            })
            .collect::<Result<Vec<_>>>()?;

        dataset.set_column(RULE_COLUMN, flags);
        Ok(())
    }
}

/// Sum of the `Cumple_Regla` column: the number of compliant molecules.
pub fn compliant_count(dataset: &Dataset) -> i64 {
    let Some(idx) = dataset.column_index(RULE_COLUMN) else {
        return 0;
    };
    dataset
        .records
        .iter()
        .filter_map(|r| match r.get(idx) {
            CellValue::Integer(i) => Some(*i),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset(rows: &[(i64, i64)]) -> Dataset {
        Dataset::new(
            vec!["Donantes_H".into(), "Aceptores_H".into()],
            rows.iter()
                .map(|&(d, a)| Record::new(vec![CellValue::Integer(d), CellValue::Integer(a)]))
                .collect(),
        )
    }

    const COLS: DescriptorColumns = DescriptorColumns { donors: 0, acceptors: 1 };

    #[test]
    fn thresholds_are_strict() {
        let rule = Rule::LIPINSKI;
        assert!(rule.is_compliant(4.0, 9.0));
        assert!(rule.is_compliant(0.0, 0.0));
        assert!(!rule.is_compliant(5.0, 9.0));
        assert!(!rule.is_compliant(4.0, 10.0));
        assert!(!rule.is_compliant(5.0, 10.0));
    }

    #[test]
    fn derive_appends_flag_column() {
        let mut ds = dataset(&[(3, 4), (5, 10), (0, 9)]);
        Rule::LIPINSKI.derive(&mut ds, COLS).unwrap();

        assert_eq!(ds.columns.last().map(String::as_str), Some(RULE_COLUMN));
        let flags: Vec<_> = ds.records.iter().map(|r| r.values[2].clone()).collect();
        assert_eq!(
            flags,
            vec![CellValue::Integer(1), CellValue::Integer(0), CellValue::Integer(1)]
        );
        assert_eq!(compliant_count(&ds), 2);
    }

    #[test]
    fn derive_overwrites_existing_flag_column() {
        let mut ds = Dataset::new(
            vec![RULE_COLUMN.into(), "Donantes_H".into(), "Aceptores_H".into()],
            vec![Record::new(vec![
                CellValue::String("si".into()),
                CellValue::Integer(1),
                CellValue::Integer(1),
            ])],
        );
        let cols = DescriptorColumns { donors: 1, acceptors: 2 };
        Rule::LIPINSKI.derive(&mut ds, cols).unwrap();

        assert_eq!(ds.columns.len(), 3);
        assert_eq!(ds.records[0].values[0], CellValue::Integer(1));
    }

    #[test]
    fn count_is_zero_for_empty_or_underived_tables() {
        let mut ds = dataset(&[]);
        assert_eq!(compliant_count(&ds), 0);
        Rule::LIPINSKI.derive(&mut ds, COLS).unwrap();
        assert_eq!(ds.columns.len(), 3);
        assert_eq!(compliant_count(&ds), 0);
    }
}
