//! Property-based tests for the forwarding loop using proptest.

use evgrab::forward::forward;
use proptest::prelude::*;
use std::path::Path;

use test_helpers::*;

const MAX_PAYLOAD: usize = 8 * 1024;

proptest! {
    /// Property: however the device chunks its bytes, and however small the
    /// transfer window, the output receives exactly those bytes in order.
    #[test]
    fn prop_byte_fidelity(
        payload in prop::collection::vec(any::<u8>(), 0..MAX_PAYLOAD),
        read_sizes in prop::collection::vec(1usize..700, 0..64),
        buf_len in 1usize..=4096,
    ) {
        let mut device = ScriptedDevice::chunked(&payload, &read_sizes);
        let mut out = Vec::new();
        let mut buf = vec![0u8; buf_len];

        let summary = forward(&mut device, Path::new("/dev/input/event0"), &mut out, &mut buf).unwrap();

        prop_assert_eq!(&out, &payload);
        prop_assert_eq!(summary.bytes, payload.len() as u64);
        prop_assert!(device.is_drained());
    }

    /// Property: an output that accepts only a few bytes per call still gets
    /// the complete payload, without loss or duplication.
    #[test]
    fn prop_short_write_tolerance(
        payload in prop::collection::vec(any::<u8>(), 0..MAX_PAYLOAD),
        read_sizes in prop::collection::vec(1usize..300, 0..32),
        max_per_write in 1usize..=17,
    ) {
        let mut device = ScriptedDevice::chunked(&payload, &read_sizes);
        let mut out = TrickleWriter::new(max_per_write);
        let mut buf = [0u8; 4096];

        let summary = forward(&mut device, Path::new("/dev/input/event0"), &mut out, &mut buf).unwrap();

        prop_assert_eq!(&out.data, &payload);
        prop_assert_eq!(summary.writes as usize, out.write_calls);
        // Every write call but the last of each chunk is full-sized.
        prop_assert!(out.write_calls >= payload.len().div_ceil(max_per_write));
    }

    /// Property: a write failure stops the stream after exactly the accepted prefix.
    #[test]
    fn prop_write_failure_keeps_prefix(
        payload in prop::collection::vec(any::<u8>(), 1..2048),
        read_sizes in prop::collection::vec(1usize..128, 0..16),
        budget_frac in 0.0f64..1.0,
    ) {
        let budget = (payload.len() as f64 * budget_frac) as usize;
        let mut device = ScriptedDevice::chunked(&payload, &read_sizes);
        let mut out = FailingWriter::new(budget, std::io::ErrorKind::BrokenPipe);
        let mut buf = [0u8; 256];

        let err = forward(&mut device, Path::new("/dev/input/event0"), &mut out, &mut buf).unwrap_err();

        prop_assert_eq!(err.exit_code(), 6);
        prop_assert_eq!(&out.data[..], &payload[..budget]);
    }
}
