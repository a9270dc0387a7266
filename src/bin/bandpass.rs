//! Ranks standard-value MFB bandpass designs for a target f, Q and gain.

use std::io::{self, Write};
use std::process::ExitCode;

use mfb_bandpass::cli::{parse_bandpass_args, BANDPASS_USAGE};
use mfb_bandpass::errors::BandpassError;
use mfb_bandpass::logging::{init_logging, LogConfig};
use mfb_bandpass::report::write_table;
use tracing::debug;

fn run(args: &[String]) -> Result<(), BandpassError> {
    let invocation = parse_bandpass_args(args)?;
    debug!(?invocation, "parsed arguments");

    let configurations = invocation.sweep.run(&invocation.target)?;
    let mut stdout = io::stdout().lock();
    write_table(&mut stdout, &configurations, invocation.units)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging(&LogConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(&err, BandpassError::Cli(cli) if cli.wants_usage()) {
                println!("{BANDPASS_USAGE}");
            }
            eprintln!("{err}");
            ExitCode::from(err.status())
        }
    }
}
