// fuzz/fuzz_targets/fuzz_forward.rs
#![no_main]

use arbitrary::Arbitrary;
use evgrab::forward::forward;
use libfuzzer_sys::fuzz_target;
use std::path::Path;
use test_helpers::{ScriptedDevice, TrickleWriter};

#[derive(Debug, Arbitrary)]
struct Case {
    payload: Vec<u8>,
    read_sizes: Vec<u16>,
    max_per_write: u8,
    buf_len: u16,
}

fuzz_target!(|case: Case| {
    let sizes: Vec<usize> = case.read_sizes.iter().map(|&s| s as usize).collect();
    let mut device = ScriptedDevice::chunked(&case.payload, &sizes);
    let mut out = TrickleWriter::new(case.max_per_write.max(1) as usize);
    let mut buf = vec![0u8; (case.buf_len as usize).clamp(1, 4096)];

    let summary = forward(&mut device, Path::new("/dev/input/fuzz"), &mut out, &mut buf)
        .expect("in-memory forward cannot fail");

    assert_eq!(out.data, case.payload);
    assert_eq!(summary.bytes, case.payload.len() as u64);
});
