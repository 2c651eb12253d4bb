use anyhow::{Context, Result};
use clap::{crate_version, App, Arg, SubCommand};
use gw_config::Config;
use gw_runner::{runner, trace};
use std::{fs, path::Path};

const COMMAND_RUN: &str = "run";
const COMMAND_EXAMPLE_CONFIG: &str = "generate-example-config";
const ARG_OUTPUT_PATH: &str = "output-path";
const ARG_CONFIG: &str = "config";
const DEFAULT_CONFIG_PATH: &str = "./config.toml";
const DEFAULT_EXAMPLE_CONFIG_PATH: &str = "./config.example.toml";

fn read_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read(&path)
        .with_context(|| format!("read config file from {}", path.as_ref().to_string_lossy()))?;
    let config = toml::from_slice(&content).with_context(|| "parse config file")?;
    Ok(config)
}

fn generate_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = Config {
        block_producer: Some(Default::default()),
        ..Default::default()
    };
    // tables must follow plain values, go through `toml::Value` to reorder
    let value = toml::Value::try_from(&config)?;
    let content = toml::to_string_pretty(&value)?;
    fs::write(path, content)?;
    Ok(())
}

async fn run_cli() -> Result<()> {
    let app = App::new("Godwoken runner")
        .about("Syncs a layer2 rollup from CKB and submits its blocks.")
        .version(crate_version!())
        .subcommand(
            SubCommand::with_name(COMMAND_RUN)
                .about("Run the runner")
                .arg(
                    Arg::with_name(ARG_CONFIG)
                        .short("c")
                        .takes_value(true)
                        .required(true)
                        .default_value(DEFAULT_CONFIG_PATH)
                        .help("The config file path"),
                )
                .display_order(0),
        )
        .subcommand(
            SubCommand::with_name(COMMAND_EXAMPLE_CONFIG)
                .about("Generate an example config file")
                .arg(
                    Arg::with_name(ARG_OUTPUT_PATH)
                        .short("o")
                        .takes_value(true)
                        .required(true)
                        .default_value(DEFAULT_EXAMPLE_CONFIG_PATH)
                        .help("The path of the example config file"),
                )
                .display_order(1),
        );

    // handle subcommands
    let matches = app.get_matches();
    match matches.subcommand() {
        (COMMAND_RUN, Some(m)) => {
            let config_path = m.value_of(ARG_CONFIG).unwrap_or(DEFAULT_CONFIG_PATH);
            let config = read_config(config_path)?;
            runner::run(config).await?;
        }
        (COMMAND_EXAMPLE_CONFIG, Some(m)) => {
            let path = m
                .value_of(ARG_OUTPUT_PATH)
                .unwrap_or(DEFAULT_EXAMPLE_CONFIG_PATH);
            generate_example_config(path)?;
        }
        _ => {
            // default command: run with the config in the working directory
            let config = read_config(DEFAULT_CONFIG_PATH)?;
            runner::run(config).await?;
        }
    };
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = trace::init() {
        eprintln!("failed to init logger: {:#}", err);
        std::process::exit(1);
    }
    if let Err(err) = run_cli().await {
        log::error!("runner exited with error: {:#}", err);
        std::process::exit(1);
    }
}
