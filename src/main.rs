//! Command-line front end: build a config, run the pipeline, print the report.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dataset_filter::config::{FilterConfig, load_config};
use dataset_filter::observability::LogObserver;
use dataset_filter::pipeline::{RunOptions, run};

#[derive(Parser)]
#[command(
    name = "dataset-filter",
    version,
    about = "Keep CSV rows whose filter column is at or below a threshold"
)]
struct Cli {
    /// JSON config file (`inputPath`, `outputPath`, `filterColumn`, `filterThreshold`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input CSV. Overrides `inputPath` from the config file.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV. Overrides `outputPath` from the config file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column to filter on [default: yearLevelID].
    #[arg(long)]
    column: Option<String>,

    /// Rows with a value above this are removed [default: 4].
    #[arg(long)]
    threshold: Option<f64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = try_main() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(cli)?;

    let options = RunOptions {
        observer: Some(Arc::new(LogObserver)),
        ..Default::default()
    };
    let report = run(&config, &options).with_context(|| {
        format!(
            "filtering {} into {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    println!("{report}");
    Ok(())
}

fn build_config(cli: Cli) -> Result<FilterConfig> {
    let mut config = match (&cli.config, &cli.input, &cli.output) {
        (Some(path), _, _) => {
            load_config(path).with_context(|| format!("load config {}", path.display()))?
        }
        (None, Some(input), Some(output)) => FilterConfig::new(input.clone(), output.clone()),
        (None, _, _) => bail!("either --config or both --input and --output are required"),
    };

    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(column) = cli.column {
        config.filter_column = column;
    }
    if let Some(threshold) = cli.threshold {
        config.filter_threshold = threshold;
    }

    Ok(config)
}
