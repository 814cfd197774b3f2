use crate::error::Error;
use clap::error::ErrorKind;
use clap::Parser;
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

/// Resolve a file of `name = term + term ...` definitions.
#[derive(clap::Parser, Debug)]
#[clap(version, about)]
pub(crate) struct Args {
    /// The file of definitions to read.
    #[arg()]
    input: PathBuf,

    /// The file to write the resolved values to.
    #[arg()]
    output: PathBuf,

    /// The global options.
    #[clap(flatten)]
    global: GlobalArgs,
}

/// Global configuration options.
#[derive(clap::Args, Debug)]
struct GlobalArgs {
    /// Log each stage of the run.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Log every resolved variable.
    #[arg(long = "debug")]
    debug: bool,
}

/// Parse the command line. `--help` and `--version` print and exit here;
/// every other clap failure becomes a usage error.
pub(crate) fn parse_args<I, T>(args: I) -> Result<Args, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            kind => Err(Error::Usage(
                kind.as_str().unwrap_or("invalid arguments").to_owned(),
            )),
        },
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Config {
        let log_level = if args.global.debug {
            LevelFilter::Trace
        } else if args.global.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        Config {
            input: args.input,
            output: args.output,
            log_level,
        }
    }
}
