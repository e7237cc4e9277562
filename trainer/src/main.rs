use std::{env, fs, path::PathBuf};

use anyhow::{Context, bail};
use log::info;
use trainer::{EXAMPLE_DATASET, TrainingConfig, train};

const DEFAULT_OUT: &str = "weight_history.csv";

const USAGE: &str = "usage: trainer [--config <path>] [--out <path>] [data.csv]";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    data: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut argv = env::args().skip(1);

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--config" => args.config = Some(argv.next().context(USAGE)?.into()),
            "--out" => args.out = Some(argv.next().context(USAGE)?.into()),
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            _ if args.data.is_none() => args.data = Some(arg.into()),
            _ => bail!("unexpected argument {arg}\n{USAGE}"),
        }
    }

    Ok(args)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => TrainingConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TrainingConfig::default(),
    };

    let csv = match &args.data {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading data {}", path.display()))?,
        None => {
            info!("no data file given, using the built-in example dataset");
            EXAMPLE_DATASET.to_string()
        }
    };

    let report = train(config, &csv)?;

    let out = args.out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
    fs::write(&out, report.to_csv()?).with_context(|| format!("writing {}", out.display()))?;

    println!(
        "trained on {} sample(s) with {} feature(s)",
        report.samples, report.features
    );
    if let Some(loss) = report.final_loss() {
        println!("final loss: {loss:.6}");
    }
    if let Some(weights) = report.final_weights() {
        println!("final weights: {weights:?}");
    }
    match report.accuracy {
        Some(acc) => println!("accuracy: {acc}%"),
        None => println!("accuracy: —"),
    }
    println!("history written to {}", out.display());

    Ok(())
}
