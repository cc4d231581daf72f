use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use userdir::args::Cli;
use userdir::source::HttpRecordSource;
use userdir::{listing, logging, ui};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = cli
        .resolve_config()
        .context("Failed to load configuration")?;

    if cli.list {
        logging::init_stderr_tracing();
        let source = HttpRecordSource::new(&config.source)?;
        let runtime = tokio::runtime::Runtime::new()?;
        return match runtime.block_on(listing::list_records(&source, &cli.filters())) {
            Ok(records) => {
                println!("{}", listing::render_table(&records));
                Ok(ExitCode::SUCCESS)
            }
            Err(message) => {
                eprintln!("Error: {message}");
                Ok(ExitCode::FAILURE)
            }
        };
    }

    logging::init_file_tracing();
    ui::run(config)?;
    Ok(ExitCode::SUCCESS)
}
