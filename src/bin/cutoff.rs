//! Prints the -3 dB frequency of a single RC section.

use std::process::ExitCode;

use mfb_bandpass::circuits::try_cutoff_frequency;
use mfb_bandpass::cli::{parse_cutoff_args, CUTOFF_USAGE};
use mfb_bandpass::errors::BandpassError;
use mfb_bandpass::logging::{init_logging, LogConfig};
use mfb_bandpass::report::write_cutoff;

fn run(args: &[String]) -> Result<(), BandpassError> {
    let (resistance, capacitance) = parse_cutoff_args(args)?;
    let frequency = try_cutoff_frequency(resistance, capacitance)?;
    write_cutoff(std::io::stdout().lock(), resistance, capacitance, frequency)?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging(&LogConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(&err, BandpassError::Cli(cli) if cli.wants_usage()) {
                println!("{CUTOFF_USAGE}");
            }
            eprintln!("{err}");
            ExitCode::from(err.status())
        }
    }
}
