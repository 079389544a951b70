use clap::Parser;
use seal_defines::{RangeError, cli::Cli, config::Config, defines::table, pipeline};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit with 2, --help with 0 (handled by clap).
    let cli = Cli::parse();

    if cli.list {
        print!("{}", table::describe_all());
        return ExitCode::SUCCESS;
    }

    // A missing selection is reported but is not a failure; nothing is touched.
    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(missing) => {
            println!("{missing}");
            return ExitCode::SUCCESS;
        }
    };

    match pipeline::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        // Range errors keep the bare message on stdout, details on stderr.
        Err(e) => {
            match e.downcast_ref::<RangeError>() {
                Some(range) => {
                    println!("{range}");
                    eprintln!("{}", range.detail());
                }
                None => eprintln!("{e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
