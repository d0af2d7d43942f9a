//! Common helpers for tests and benchmarks: fake devices and output channels.
use input_linux_sys::{input_event, timeval, EV_KEY, EV_SYN};
use std::cell::Cell;
use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::mem::size_of;
use std::rc::Rc;

// --- Constants ---
pub const KEY_A: u16 = 30;
pub const KEY_B: u16 = 48;

// --- Event Creation Helpers ---

/// Creates an EV_KEY input_event with a specific microsecond timestamp.
pub fn key_ev(ts_us: u64, code: u16, value: i32) -> input_event {
    input_event {
        time: timeval {
            tv_sec: (ts_us / 1_000_000) as _,
            tv_usec: (ts_us % 1_000_000) as _,
        },
        type_: EV_KEY as u16,
        code,
        value,
    }
}

/// Creates an EV_SYN/SYN_REPORT input_event.
pub fn syn_ev(ts_us: u64) -> input_event {
    input_event {
        time: timeval {
            tv_sec: (ts_us / 1_000_000) as _,
            tv_usec: (ts_us % 1_000_000) as _,
        },
        type_: EV_SYN as u16,
        code: 0,
        value: 0,
    }
}

/// Serializes events the way the kernel hands them to `read(2)`.
pub fn events_to_bytes(events: &[input_event]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(std::mem::size_of_val(events));
    for ev in events {
        // SAFETY: input_event is POD; the slice covers exactly one value owned by `ev`.
        bytes.extend_from_slice(unsafe {
            std::slice::from_raw_parts(ev as *const _ as *const u8, size_of::<input_event>())
        });
    }
    bytes
}

/// `[0x01, 0x02, ..., len]`.
pub fn counting_bytes(len: u8) -> Vec<u8> {
    (1..=len).collect()
}

// --- Fake devices ---

/// One scripted result of a `read` call.
#[derive(Debug)]
pub enum Step {
    Data(Vec<u8>),
    Interrupted,
    Fail(io::ErrorKind),
}

/// A device that answers each `read` with the next scripted step, then EOF.
///
/// A `Data` chunk larger than the caller's buffer is split across reads.
#[derive(Debug, Default)]
pub struct ScriptedDevice {
    steps: VecDeque<Step>,
    pub read_calls: usize,
}

impl ScriptedDevice {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            read_calls: 0,
        }
    }

    /// A device that delivers `payload` in pieces of the given sizes.
    /// Sizes beyond the payload are ignored; any remainder comes as one last chunk.
    pub fn chunked(payload: &[u8], sizes: &[usize]) -> Self {
        let mut steps = Vec::new();
        let mut rest = payload;
        for &size in sizes {
            if rest.is_empty() {
                break;
            }
            let take = size.clamp(1, rest.len());
            steps.push(Step::Data(rest[..take].to_vec()));
            rest = &rest[take..];
        }
        if !rest.is_empty() {
            steps.push(Step::Data(rest.to_vec()));
        }
        Self::new(steps)
    }

    pub fn is_drained(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Read for ScriptedDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_calls += 1;
        match self.steps.pop_front() {
            None => Ok(0),
            Some(Step::Interrupted) => Err(io::ErrorKind::Interrupted.into()),
            Some(Step::Fail(kind)) => Err(kind.into()),
            Some(Step::Data(mut data)) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);
                if n < data.len() {
                    self.steps.push_front(Step::Data(data.split_off(n)));
                }
                Ok(n)
            }
        }
    }
}

/// Wraps a device and records when it is dropped, i.e. when its handle closes.
#[derive(Debug)]
pub struct ClosingDevice<R> {
    inner: R,
    closed: Rc<Cell<bool>>,
}

impl<R> ClosingDevice<R> {
    /// Returns the wrapper and a flag that flips to `true` on drop.
    pub fn new(inner: R) -> (Self, Rc<Cell<bool>>) {
        let closed = Rc::new(Cell::new(false));
        (
            Self {
                inner,
                closed: Rc::clone(&closed),
            },
            closed,
        )
    }
}

impl<R: Read> Read for ClosingDevice<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Drop for ClosingDevice<R> {
    fn drop(&mut self) {
        self.closed.set(true);
    }
}

// --- Fake output channels ---

/// Output that accepts at most `max_per_write` bytes per call.
#[derive(Debug)]
pub struct TrickleWriter {
    pub data: Vec<u8>,
    pub max_per_write: usize,
    pub write_calls: usize,
    pub flushes: usize,
}

impl TrickleWriter {
    pub fn new(max_per_write: usize) -> Self {
        Self {
            data: Vec::new(),
            max_per_write,
            write_calls: 0,
            flushes: 0,
        }
    }
}

impl Write for TrickleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_calls += 1;
        let n = buf.len().min(self.max_per_write);
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Output that accepts `budget` bytes, then fails every write with `kind`.
#[derive(Debug)]
pub struct FailingWriter {
    pub data: Vec<u8>,
    budget: usize,
    kind: Option<io::ErrorKind>,
}

impl FailingWriter {
    /// Fails with `kind` once the budget is spent.
    pub fn new(budget: usize, kind: io::ErrorKind) -> Self {
        Self {
            data: Vec::new(),
            budget,
            kind: Some(kind),
        }
    }

    /// Returns `Ok(0)` once the budget is spent.
    pub fn zero_after(budget: usize) -> Self {
        Self {
            data: Vec::new(),
            budget,
            kind: None,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return match self.kind {
                Some(kind) => Err(kind.into()),
                None => Ok(0),
            };
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Output that reports `Interrupted` on every other write call.
#[derive(Debug, Default)]
pub struct InterruptingWriter {
    pub data: Vec<u8>,
    calls: usize,
}

impl Write for InterruptingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls % 2 == 1 {
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
