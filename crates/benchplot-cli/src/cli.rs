use anyhow::{Context, Result};
use benchplot_core::config::DEFAULT_INPUT;
use benchplot_core::{DisplayMode, PlotConfig};
use benchplot_sort::BenchConfig;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

pub(crate) fn command() -> Command {
    Command::new("benchplot")
        .version(benchplot_core::VERSION)
        .about("Benchmark merge sort and plot the results on log-log axes")
        .long_about(
            "Without a subcommand, plots benchmark_results.txt into \
             benchmark_plot.png and shows it when a display is available.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (repeatable)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log warnings and errors"),
        )
        .subcommand(
            Command::new("plot")
                .about("Plot a results table")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML configuration file"),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_parser(value_parser!(PathBuf))
                        .help("Results table to read"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_parser(value_parser!(PathBuf))
                        .help("PNG file to write"),
                )
                .arg(
                    Arg::new("display")
                        .long("display")
                        .value_parser(["auto", "always", "never"])
                        .help("Whether to open the saved figure"),
                )
                .arg(
                    Arg::new("font")
                        .long("font")
                        .value_parser(value_parser!(PathBuf))
                        .help("TrueType font for chart text"),
                ),
        )
        .subcommand(
            Command::new("bench")
                .about("Time merge sort and write a results table")
                .arg(
                    Arg::new("sizes")
                        .long("sizes")
                        .value_delimiter(',')
                        .num_args(1..)
                        .value_parser(value_parser!(usize))
                        .help("Array sizes, comma separated (default: 2^10..2^20)"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("42")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for array contents"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .default_value(DEFAULT_INPUT)
                        .value_parser(value_parser!(PathBuf))
                        .help("Results file to write"),
                )
                .arg(
                    Arg::new("append")
                        .long("append")
                        .action(ArgAction::SetTrue)
                        .help("Append to the results file instead of replacing it"),
                ),
        )
}

/// Net verbosity: `-v` count, or -1 for `-q`
pub(crate) fn verbosity(matches: &ArgMatches) -> i8 {
    if matches.get_flag("quiet") {
        return -1;
    }
    let count = matches.get_count("verbose");
    i8::try_from(count).unwrap_or(i8::MAX)
}

/// Layer defaults, the optional config file, then flags
pub(crate) fn plot_config(args: &ArgMatches) -> Result<PlotConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => PlotConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => PlotConfig::new(),
    };

    if let Some(input) = args.get_one::<PathBuf>("input") {
        config = config.with_input(input);
    }
    if let Some(output) = args.get_one::<PathBuf>("output") {
        config = config.with_output(output);
    }
    if let Some(display) = args.get_one::<String>("display") {
        config = config.with_display(display.parse::<DisplayMode>()?);
    }
    if let Some(font) = args.get_one::<PathBuf>("font") {
        config = config.with_font(font);
    }
    Ok(config)
}

/// Benchmark settings plus the results path and write mode
pub(crate) fn bench_config(args: &ArgMatches) -> (BenchConfig, PathBuf, bool) {
    let mut config = BenchConfig::new();
    if let Some(sizes) = args.get_many::<usize>("sizes") {
        config = config.with_sizes(sizes.copied().collect());
    }
    if let Some(seed) = args.get_one::<u64>("seed") {
        config = config.with_seed(*seed);
    }
    let output = args
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    (config, output, args.get_flag("append"))
}
