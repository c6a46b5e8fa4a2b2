use benchplot_core::{render, ResultsTable};
use benchplot_sort::{run, write_results, BenchConfig};
use benchplot_test_utils::Scratch;

#[test]
fn benchmark_output_loads_as_results_table() {
    let scratch = Scratch::new();
    let path = scratch.path("benchmark_results.txt");
    let sizes = vec![64, 128, 256, 512];

    let samples = run(&BenchConfig::new().with_sizes(sizes.clone()).with_seed(1)).unwrap();
    write_results(&path, &samples, false).unwrap();

    let table = ResultsTable::load(&path).unwrap();
    let loaded: Vec<usize> = table.sizes().iter().map(|&s| s as usize).collect();
    assert_eq!(loaded, sizes);
    assert_eq!(table.times(), samples.iter().map(|s| s.seconds()).collect::<Vec<_>>());
}

#[test]
fn appended_runs_accumulate() {
    let scratch = Scratch::new();
    let path = scratch.path("benchmark_results.txt");

    for size in [32, 64, 128] {
        let samples = run(&BenchConfig::new().with_sizes(vec![size])).unwrap();
        write_results(&path, &samples, true).unwrap();
    }

    let table = ResultsTable::load(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert!(render(&table).is_log_log());
}
