use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use evgrab::forward::{forward, BUFFER_SIZE};
use std::hint::black_box;
use std::path::Path;

use test_helpers::*;

// A few thousand key press/release pairs, each followed by SYN_REPORT.
fn typing_burst(pairs: u64) -> Vec<u8> {
    let events: Vec<_> = (0..pairs)
        .flat_map(|i| {
            let t = i * 20_000;
            [key_ev(t, KEY_A, 1), syn_ev(t), key_ev(t + 8_000, KEY_A, 0), syn_ev(t + 8_000)]
        })
        .collect();
    events_to_bytes(&events)
}

fn bench_forward(c: &mut Criterion) {
    let payload = typing_burst(5_000);
    let mut group = c.benchmark_group("forward");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    // Kernel evdev reads typically return one SYN-terminated report at a time.
    for read_size in [48usize, 512, BUFFER_SIZE] {
        group.bench_with_input(BenchmarkId::new("read_size", read_size), &read_size, |b, &rs| {
            b.iter(|| {
                let mut device = ScriptedDevice::chunked(&payload, &[rs; 1024]);
                let mut out = Vec::with_capacity(payload.len());
                let mut buf = [0u8; BUFFER_SIZE];
                let summary =
                    forward(&mut device, Path::new("/dev/input/bench"), &mut out, &mut buf).unwrap();
                black_box((summary, out))
            })
        });
    }

    group.bench_function("trickle_output_64", |b| {
        b.iter(|| {
            let mut device = ScriptedDevice::chunked(&payload, &[BUFFER_SIZE; 1024]);
            let mut out = TrickleWriter::new(64);
            let mut buf = [0u8; BUFFER_SIZE];
            let summary = forward(&mut device, Path::new("/dev/input/bench"), &mut out, &mut buf).unwrap();
            black_box((summary, out.data))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_forward);
criterion_main!(benches);
