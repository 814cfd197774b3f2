mod config;
mod error;
mod output;

use config::{parse_args, Config};
use error::Error;
use log::{debug, info, LevelFilter};
use std::fs;
use std::process::ExitCode;

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Read, resolve, and write. The output file is only created once every
/// value is known.
fn run(config: &Config) -> Result<(), Error> {
    let text = fs::read_to_string(&config.input).map_err(|source| Error::Read {
        path: config.input.clone(),
        source,
    })?;
    debug!("read {} bytes from {}", text.len(), config.input.display());

    let values = eqn_core::evaluate(&text)?;
    let rendered = output::render(&values);

    fs::write(&config.output, rendered).map_err(|source| Error::Write {
        path: config.output.clone(),
        source,
    })?;
    info!(
        "wrote {} values to {}",
        values.len(),
        config.output.display()
    );
    Ok(())
}

fn try_main() -> Result<(), Error> {
    let config = Config::from(parse_args(std::env::args_os())?);
    init_logging(config.log_level);
    debug!("{config:?}");
    run(&config)
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Fail reason: {err}");
            ExitCode::FAILURE
        }
    }
}
