// Application entry point.
// Parses the device argument, grabs the device, streams it to stdout and
// turns the outcome into an exit status. The device is closed on every path:
// by drop on return, by the kernel on exit or signal.

use evgrab::cli;
use evgrab::config::{self, Config};
use evgrab::device::GrabbedDevice;
use evgrab::error::{Error, Result};
use evgrab::event::split_records;
use evgrab::forward::{self, Summary, BUFFER_SIZE};
use evgrab::{logger, signals, util};
use std::fs::File;
use std::io;
use std::os::fd::AsFd;
use std::os::unix::io::AsRawFd;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Unbuffered handle on stdout. `io::Stdout` line-buffers, which would hold
/// back event bytes until a 0x0a happened to come along.
fn raw_stdout() -> io::Result<File> {
    Ok(File::from(io::stdout().as_fd().try_clone_to_owned()?))
}

fn run(cfg: &Config) -> Result<Summary> {
    let mut out = raw_stdout().map_err(|source| Error::Write { source })?;

    let device = GrabbedDevice::open(&cfg.device)?;
    info!(device = %device.path().display(), fd = device.as_raw_fd(), "grabbing");

    let started = Instant::now();
    let mut buf = [0u8; BUFFER_SIZE];
    // The device moves into forward and is closed (grab released) when it returns.
    let summary = forward::forward(device, &cfg.device, &mut out, &mut buf)?;

    let (events, trailing) = split_records(summary.bytes);
    info!(device = %cfg.device.display(), "read: EOF");
    info!(
        bytes = summary.bytes,
        events,
        trailing_bytes = trailing,
        reads = summary.reads,
        writes = summary.writes,
        elapsed = %util::format_duration(started.elapsed()),
        "stream finished"
    );
    Ok(summary)
}

fn main() -> ExitCode {
    logger::init_tracing(&config::log_filter_from_env());

    let args = match cli::parse_args() {
        Ok(args) => args,
        // --help and --version: clap prints them to stdout.
        Err(e) if !e.use_stderr() => {
            return match e.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(source) => fail(Error::Write { source }),
            };
        }
        Err(e) => return fail(Error::from(e)),
    };

    let cfg = Config::from(&args);
    debug!(device = %cfg.device.display(), "parsed arguments");

    if let Err(e) = signals::spawn_listener(cfg.device.clone()) {
        // Default dispositions still terminate us, and the kernel still releases the grab.
        warn!(error = %e, "signal listener unavailable");
    }

    match run(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(e: Error) -> ExitCode {
    error!("{e}");
    ExitCode::from(e.exit_code() as u8)
}
