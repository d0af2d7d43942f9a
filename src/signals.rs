//! Termination signal reporting.
//!
//! The grab needs no cleanup on a signal: exiting closes the device fd and
//! the kernel releases the grab. The listener only logs why we are leaving
//! and picks the conventional `128 + signo` status.

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};
use signal_hook::iterator::Signals;
use std::io;
use std::path::PathBuf;
use std::process::exit;
use std::thread;
use tracing::warn;

pub const TERMINATION_SIGNALS: [i32; 4] = [SIGHUP, SIGINT, SIGQUIT, SIGTERM];

/// Exit status used after handling `signal`.
#[inline]
pub fn exit_status_for(signal: i32) -> i32 {
    128 + signal
}

/// Starts the listener thread. Never touches the device or stdout.
pub fn spawn_listener(device: PathBuf) -> io::Result<()> {
    let mut signals = Signals::new(TERMINATION_SIGNALS)?;
    thread::Builder::new()
        .name("signals".into())
        .spawn(move || {
            if let Some(sig) = signals.forever().next() {
                warn!(
                    signal = sig,
                    device = %device.display(),
                    "received signal, exiting; kernel releases the grab on close"
                );
                exit(exit_status_for(sig));
            }
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_exit_status_is_conventional() {
        assert_eq!(exit_status_for(SIGTERM), 143);
        assert_eq!(exit_status_for(SIGINT), 130);
        assert_eq!(exit_status_for(SIGHUP), 129);
    }
}
