use input_linux_sys::input_event;
use std::mem::size_of;

/// Size of one kernel `input_event` record on this target.
pub const EVENT_SIZE: usize = size_of::<input_event>();

/// Splits a byte count into whole `input_event` records and leftover bytes.
///
/// Only used for diagnostics; the stream itself is never framed. A non-zero
/// remainder on EOF means the device (or the reader) stopped mid-record.
#[inline]
pub fn split_records(bytes: u64) -> (u64, u64) {
    let size = EVENT_SIZE as u64;
    (bytes / size, bytes % size)
}
