use std::path::Path;

use crate::data::filter::RangeFilter;
use crate::data::loader::load_file;
use crate::data::model::{Dataset, DescriptorColumns, RULE_COLUMN};
use crate::data::rule::{Rule, compliant_count};
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Report – everything the UI shows for one processed file
// ---------------------------------------------------------------------------

/// One point of the scatter plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub acceptors: f64,
    pub donors: f64,
    pub compliant: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Retained records with `Cumple_Regla` set.
    pub dataset: Dataset,
    /// Rows in the file before filtering.
    pub loaded_rows: usize,
    /// Sum of `Cumple_Regla`.
    pub compliant: i64,
    pub points: Vec<ScatterPoint>,
}

// ---------------------------------------------------------------------------
// Validate → Filter → Derive → Summarize
// ---------------------------------------------------------------------------

/// Load a file and run it through the pipeline.
pub fn run_file(path: &Path) -> Result<Report, PipelineError> {
    let dataset = load_file(path)?;
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.len(),
        dataset.columns,
        path.display()
    );
    run(dataset)
}

/// Run an already loaded dataset through the pipeline.
pub fn run(dataset: Dataset) -> Result<Report, PipelineError> {
    let columns =
        DescriptorColumns::locate(&dataset).map_err(|missing| PipelineError::Schema { missing })?;

    let loaded_rows = dataset.len();
    let mut retained = RangeFilter::LIPINSKI.apply(dataset, columns)?;
    Rule::LIPINSKI.derive(&mut retained, columns)?;

    let compliant = compliant_count(&retained);
    let points = scatter_points(&retained, columns);

    log::info!(
        "Retained {} of {loaded_rows} rows, {compliant} compliant",
        retained.len()
    );

    Ok(Report {
        dataset: retained,
        loaded_rows,
        compliant,
        points,
    })
}

/// Plot coordinates of the retained rows. The filter has already rejected
/// non-numeric descriptors, so anything unreadable here is skipped.
fn scatter_points(dataset: &Dataset, columns: DescriptorColumns) -> Vec<ScatterPoint> {
    let flag_idx = dataset.column_index(RULE_COLUMN);
    dataset
        .records
        .iter()
        .filter_map(|record| {
            Some(ScatterPoint {
                acceptors: record.get(columns.acceptors).as_f64()?,
                donors: record.get(columns.donors).as_f64()?,
                compliant: flag_idx.is_some_and(|idx| record.get(idx).as_f64() == Some(1.0)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::export::to_csv;
    use crate::data::loader::read_csv;
    use crate::data::model::{CellValue, Record};

    fn table(columns: &[&str], rows: Vec<Vec<CellValue>>) -> Dataset {
        Dataset::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.into_iter().map(Record::new).collect(),
        )
    }

    fn descriptors(rows: &[(i64, i64)]) -> Dataset {
        table(
            &["Donantes_H", "Aceptores_H"],
            rows.iter()
                .map(|&(d, a)| vec![CellValue::Integer(d), CellValue::Integer(a)])
                .collect(),
        )
    }

    #[test]
    fn worked_example() {
        let report = run(descriptors(&[(3, 4), (5, 10), (6, 2), (-1, 3)])).unwrap();

        assert_eq!(report.loaded_rows, 4);
        assert_eq!(report.dataset.columns, vec!["Donantes_H", "Aceptores_H", "Cumple_Regla"]);
        assert_eq!(
            report.dataset.records,
            vec![
                Record::new(vec![CellValue::Integer(3), CellValue::Integer(4), CellValue::Integer(1)]),
                Record::new(vec![CellValue::Integer(5), CellValue::Integer(10), CellValue::Integer(0)]),
            ]
        );
        assert_eq!(report.compliant, 1);
        assert_eq!(
            report.points,
            vec![
                ScatterPoint { acceptors: 4.0, donors: 3.0, compliant: true },
                ScatterPoint { acceptors: 10.0, donors: 5.0, compliant: false },
            ]
        );
    }

    #[test]
    fn flag_matches_rule_and_count_matches_sum() {
        let rows: Vec<(i64, i64)> = (-1..=6).flat_map(|d| (-1..=11).map(move |a| (d, a))).collect();
        let report = run(descriptors(&rows)).unwrap();

        let mut sum = 0;
        for record in &report.dataset.records {
            let d = record.values[0].as_f64().unwrap();
            let a = record.values[1].as_f64().unwrap();
            assert!((0.0..=5.0).contains(&d) && (0.0..=10.0).contains(&a));

            let CellValue::Integer(flag) = record.values[2] else {
                panic!("flag is not an integer: {:?}", record.values[2]);
            };
            assert_eq!(flag == 1, d < 5.0 && a < 10.0);
            sum += flag;
        }
        assert_eq!(report.compliant, sum);
        assert_eq!(report.compliant, 5 * 10);
    }

    #[test]
    fn extra_columns_pass_through() {
        let ds = table(
            &["Molecula", "Donantes_H", "Peso", "Aceptores_H"],
            vec![vec![
                CellValue::String("cafeina".into()),
                CellValue::Integer(0),
                CellValue::Float(194.19),
                CellValue::Integer(6),
            ]],
        );
        let report = run(ds).unwrap();
        assert_eq!(
            report.dataset.columns,
            vec!["Molecula", "Donantes_H", "Peso", "Aceptores_H", "Cumple_Regla"]
        );
        assert_eq!(report.dataset.records[0].values[2], CellValue::Float(194.19));
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let ds = table(&["Donantes_H", "Peso"], vec![vec![CellValue::Integer(9), CellValue::Null]]);
        match run(ds) {
            Err(PipelineError::Schema { missing }) => assert_eq!(missing, vec!["Aceptores_H"]),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_descriptor_is_a_processing_error() {
        let ds = table(
            &["Donantes_H", "Aceptores_H"],
            vec![vec![CellValue::Integer(1), CellValue::String("varios".into())]],
        );
        let err = run(ds).unwrap_err();
        assert!(matches!(err, PipelineError::Processing(_)));
        assert!(err.to_string().starts_with("Error al procesar el archivo: "));
    }

    #[test]
    fn not_available_markers_drop_the_row() {
        let ds = read_csv(
            "Molecula,Donantes_H,Aceptores_H\nA,#N/A,3\nB,2,NA\nC,1,1\nD,NULL,4\n".as_bytes(),
        )
        .unwrap();
        let report = run(ds).unwrap();
        assert_eq!(report.loaded_rows, 4);
        assert_eq!(report.dataset.len(), 1);
        assert_eq!(report.dataset.records[0].values[0], CellValue::String("C".into()));
        assert_eq!(report.compliant, 1);
    }

    #[test]
    fn workbook_na_cell_drops_the_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moleculas.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Donantes_H").unwrap();
        sheet.write_string(0, 1, "Aceptores_H").unwrap();
        sheet.write_string(1, 0, "#N/A").unwrap();
        sheet.write_number(1, 1, 3.0).unwrap();
        sheet.write_number(2, 0, 2.0).unwrap();
        sheet.write_number(2, 1, 9.0).unwrap();
        workbook.save(&path).unwrap();

        let report = run_file(&path).unwrap();
        assert_eq!(report.loaded_rows, 2);
        assert_eq!(
            report.dataset.records,
            vec![Record::new(vec![CellValue::Integer(2), CellValue::Integer(9), CellValue::Integer(1)])]
        );
    }

    #[test]
    fn empty_table_yields_empty_report() {
        let report = run(descriptors(&[])).unwrap();
        assert!(report.dataset.is_empty());
        assert!(report.points.is_empty());
        assert_eq!(report.compliant, 0);
        assert_eq!(
            String::from_utf8(to_csv(&report.dataset).unwrap()).unwrap(),
            "Donantes_H,Aceptores_H,Cumple_Regla\n"
        );
    }

    #[test]
    fn export_round_trips_retained_rows_and_flags() {
        let report = run(descriptors(&[(3, 4), (5, 10), (6, 2), (0, 0)])).unwrap();
        let reparsed = read_csv(to_csv(&report.dataset).unwrap().as_slice()).unwrap();
        assert_eq!(reparsed, report.dataset);
    }

    #[test]
    fn run_file_reads_csv_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "Molecula,Donantes_H,Aceptores_H").unwrap();
        writeln!(file, "A,1,2").unwrap();
        writeln!(file, "B,7,2").unwrap();
        file.flush().unwrap();

        let report = run_file(file.path()).unwrap();
        assert_eq!(report.loaded_rows, 2);
        assert_eq!(report.dataset.len(), 1);
        assert_eq!(report.compliant, 1);
    }

    #[test]
    fn run_file_reports_unreadable_input() {
        let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        file.write_all(b"not a zip archive").unwrap();
        file.flush().unwrap();

        let err = run_file(file.path()).unwrap_err();
        assert!(matches!(err, PipelineError::Processing(_)));
    }
}
