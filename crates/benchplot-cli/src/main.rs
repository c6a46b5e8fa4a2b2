//! `benchplot` command-line entry point

mod cli;
mod logging;

use anyhow::{Context, Result};
use benchplot_core::{PlotConfig, Shown};
use clap::ArgMatches;

fn main() {
    let matches = cli::command().get_matches();
    logging::init(cli::verbosity(&matches));

    if let Err(err) = dispatch(&matches) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn dispatch(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("plot", args)) => plot(&cli::plot_config(args)?),
        Some(("bench", args)) => bench(args),
        _ => plot(&PlotConfig::new()),
    }
}

fn plot(config: &PlotConfig) -> Result<()> {
    let report = benchplot_core::run(config)
        .with_context(|| format!("plotting {}", config.input.display()))?;

    println!(
        "Plotted {} rows ({} drawn) to {}",
        report.rows,
        report.figure.point_count(),
        config.output.display()
    );
    if report.shown == Shown::Headless {
        println!("No display available; open {} to view it", config.output.display());
    }
    Ok(())
}

fn bench(args: &ArgMatches) -> Result<()> {
    let (config, output, append) = cli::bench_config(args);

    let samples = benchplot_sort::run(&config).context("running merge sort benchmark")?;
    benchplot_sort::write_results(&output, &samples, append)?;

    for sample in &samples {
        println!("{}", benchplot_sort::format_line(sample));
    }
    Ok(())
}
