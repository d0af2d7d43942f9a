// The read-then-write loop between the grabbed device and the output channel.
// Bytes are passed through untouched: no framing, no decoding, no reordering.


use crate::error::{Error, Result};
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;
use tracing::trace;

/// Size of the transfer buffer. A few pages of `input_event` records.
pub const BUFFER_SIZE: usize = 4096;

/// Counters for the exit diagnostics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Bytes read from the device and fully written to the output.
    pub bytes: u64,
    /// Non-empty reads.
    pub reads: u64,
    /// Write calls issued, including those that accepted only part of a chunk.
    pub writes: u64,
}

/// Writes all of `buf`, resubmitting the remainder after short writes.
///
/// Returns the number of write calls. `Ok(0)` from the writer is terminal
/// (`WriteZero`). `Interrupted` reissues the same write.
pub fn write_fully<W: Write + ?Sized>(writer: &mut W, buf: &[u8]) -> io::Result<u64> {
    let mut offset = 0;
    let mut calls = 0;
    while offset < buf.len() {
        match writer.write(&buf[offset..]) {
            Ok(0) => {
                return Err(io::Error::new(
                    ErrorKind::WriteZero,
                    "output accepted no bytes",
                ))
            }
            Ok(n) => {
                calls += 1;
                offset += n;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(calls)
}

/// Copies everything from `device` to `out` until the device reports EOF.
///
/// `device` is consumed and dropped on return, so an owned handle is closed
/// on EOF and on every error. Pass `&mut reader` to keep it.
/// `buf` is the transfer window and is reused for every read. It must not be
/// empty: a zero-length read would be indistinguishable from EOF. Each chunk
/// is flushed before the next read so nothing sits in a buffered writer.
/// The first read or write failure ends the loop; nothing is retried.
pub fn forward<R, W>(mut device: R, device_path: &Path, out: &mut W, buf: &mut [u8]) -> Result<Summary>
where
    R: Read,
    W: Write + ?Sized,
{
    if buf.is_empty() {
        return Err(Error::Read {
            path: device_path.to_path_buf(),
            source: io::Error::new(ErrorKind::InvalidInput, "empty transfer buffer"),
        });
    }

    let mut summary = Summary::default();
    loop {
        let n = match device.read(buf) {
            Ok(0) => return Ok(summary),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(Error::Read {
                    path: device_path.to_path_buf(),
                    source,
                })
            }
        };
        summary.reads += 1;

        let calls = write_fully(out, &buf[..n]).map_err(|source| Error::Write { source })?;
        out.flush().map_err(|source| Error::Write { source })?;

        summary.writes += calls;
        summary.bytes += n as u64;
        trace!(bytes = n, write_calls = calls, total = summary.bytes, "forwarded chunk");
    }
}
