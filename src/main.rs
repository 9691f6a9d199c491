use anyhow::{Context, Result};
use circmean::{average_with, config::Config, demo::demo_reports};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the circular mean of the built-in reading sets.
    Demo,

    /// Print the circular mean of the readings in a TOML file.
    Average {
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    match args.command {
        Command::Demo => {
            for report in demo_reports().context("failed to run demo")? {
                println!("{report}");
            }
        }
        Command::Average { file } => {
            let cfg = Config::from_file(&file).context("failed to construct cfg")?;
            log::info!("loaded {} readings from {file:?}", cfg.readings.len());

            let report = average_with(&cfg.readings, cfg.options())
                .with_context(|| format!("failed to average readings from {file:?}"))?;
            println!("{report}");
        }
    }

    Ok(())
}
