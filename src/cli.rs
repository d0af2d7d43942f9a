use clap::Parser;
use std::path::PathBuf;

/// Exclusively grab an evdev device (EVIOCGRAB) and stream its raw events to stdout.
/// The grab is released by the kernel as soon as this process exits, however it exits.
/// Diagnostics go to stderr; set RUST_LOG to change their verbosity.
#[derive(Parser, Debug)]
#[command(name = "evgrab", author, version, about, long_about = None)]
pub struct Args {
    /// Input device node to grab, e.g. /dev/input/event1.
    #[arg(value_name = "DEVICE")]
    pub device: PathBuf,
}

/// Parses command line arguments using clap.
///
/// Unlike `Args::parse`, this hands usage errors back to the caller so they
/// can be reported with the tool's own exit status.
pub fn parse_args() -> Result<Args, clap::Error> {
    Args::try_parse()
}
