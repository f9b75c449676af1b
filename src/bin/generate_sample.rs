use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[lo, hi]`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo + 1) as f64) as i64
    }
}

struct Molecule {
    name: String,
    donors: i64,
    acceptors: i64,
    weight: f64,
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // A few known compounds, including rows on and beyond the filter bounds.
    let mut molecules = vec![
        Molecule { name: "Aspirina".into(), donors: 1, acceptors: 4, weight: 180.16 },
        Molecule { name: "Cafeina".into(), donors: 0, acceptors: 6, weight: 194.19 },
        Molecule { name: "Paracetamol".into(), donors: 2, acceptors: 2, weight: 151.16 },
        Molecule { name: "Limite".into(), donors: 5, acceptors: 10, weight: 480.0 },
        Molecule { name: "Vancomicina".into(), donors: 19, acceptors: 24, weight: 1449.3 },
        Molecule { name: "Invalida".into(), donors: -1, acceptors: 3, weight: 0.0 },
    ];

    for i in 0..94 {
        molecules.push(Molecule {
            name: format!("Mol_{i:03}"),
            donors: rng.range(0, 7),
            acceptors: rng.range(0, 13),
            weight: 150.0 + rng.next_f64() * 450.0,
        });
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("Molecula", DataType::Utf8, false),
        Field::new("Donantes_H", DataType::Int64, false),
        Field::new("Aceptores_H", DataType::Int64, false),
        Field::new("Peso_Molecular", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                molecules.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                molecules.iter().map(|m| m.donors).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                molecules.iter().map(|m| m.acceptors).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                molecules.iter().map(|m| m.weight).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let parquet_path = "sample_molecules.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    // Write CSV
    let csv_path = "sample_molecules.csv";
    let mut csv_writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    csv_writer
        .write_record(["Molecula", "Donantes_H", "Aceptores_H", "Peso_Molecular"])
        .expect("Failed to write CSV header");
    for m in &molecules {
        csv_writer
            .write_record([
                m.name.clone(),
                m.donors.to_string(),
                m.acceptors.to_string(),
                format!("{:.2}", m.weight),
            ])
            .expect("Failed to write CSV row");
    }
    csv_writer.flush().expect("Failed to flush CSV file");

    println!(
        "Wrote {} molecules to {parquet_path} and {csv_path}",
        molecules.len()
    );
}
