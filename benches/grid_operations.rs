//! Benchmarks for CSV parsing, serialization and grid edits
//!
//! Run with: cargo bench grid_operations

use gridedit::csv::{parse_csv, CsvFormat, Delimiter, Grid, HeaderOnlySource};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_csv(rows: usize) -> String {
    let mut text = String::from("id,name,comment,amount\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{},item {},\"note, with comma\",{}.50\n",
            i,
            i,
            i * 3
        ));
    }
    text
}

fn sample_grid(rows: usize) -> Grid {
    let table = parse_csv(&sample_csv(rows), Delimiter::Comma).unwrap();
    Grid::from_table(table, HeaderOnlySource::Accept).unwrap()
}

// ============================================================================
// Codec
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn parse(bencher: divan::Bencher, rows: usize) {
    let text = sample_csv(rows);
    bencher.bench(|| parse_csv(divan::black_box(&text), Delimiter::Comma).unwrap());
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn serialize(bencher: divan::Bencher, rows: usize) {
    let grid = sample_grid(rows);
    bencher.bench(|| grid.to_csv(CsvFormat::default()).unwrap());
}

// ============================================================================
// Structural edits
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn add_then_remove_column(bencher: divan::Bencher, rows: usize) {
    let mut grid = sample_grid(rows);
    bencher.bench_local(|| {
        grid.add_column();
        grid.remove_column()
    });
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn remove_first_row(bencher: divan::Bencher, rows: usize) {
    bencher
        .with_inputs(|| sample_grid(rows))
        .bench_local_values(|mut grid| {
            grid.remove_row(0).unwrap();
            grid
        });
}
