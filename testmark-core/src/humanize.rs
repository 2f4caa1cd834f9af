// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Human-readable durations and byte counts.
//!
//! Values are broken down from the largest applicable unit to the smallest,
//! skipping units that are zero, e.g. `1234567ns` renders as
//! `1ms 234µs 567ns`. Zero renders as `0ns` / `0B`.

/// One hour in nanoseconds.
pub const HOUR: i64 = 3_600_000_000_000;
/// One minute in nanoseconds.
pub const MIN: i64 = 60_000_000_000;
/// One second in nanoseconds.
pub const SEC: i64 = 1_000_000_000;
/// One millisecond in nanoseconds.
pub const MILLI: i64 = 1_000_000;
/// One microsecond in nanoseconds.
pub const MICRO: i64 = 1_000;

/// One gibibyte.
pub const GIB: i64 = 1 << 30;
/// One mebibyte.
pub const MIB: i64 = 1 << 20;
/// One kibibyte.
pub const KIB: i64 = 1 << 10;

const TIME_UNITS: [(i64, &str); 5] = [
    (HOUR, "h"),
    (MIN, "m"),
    (SEC, "s"),
    (MILLI, "ms"),
    (MICRO, "µs"),
];

const BYTE_UNITS: [(i64, &str); 3] = [(GIB, "GiB"), (MIB, "MiB"), (KIB, "KiB")];

/// Format a nanosecond count, e.g. `3661000000000` as `1h 1m 1s`.
pub fn human_ns(ns: i64) -> String {
    breakdown(ns, &TIME_UNITS, "ns")
}

/// Format a byte count using binary prefixes, e.g. `1536` as `1KiB 512B`.
pub fn human_bytes(bytes: i64) -> String {
    breakdown(bytes, &BYTE_UNITS, "B")
}

fn breakdown(mut value: i64, units: &[(i64, &str)], smallest: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for &(size, suffix) in units {
        if value >= size {
            parts.push(format!("{}{}", value / size, suffix));
            value %= size;
        }
    }

    if value != 0 || parts.is_empty() {
        parts.push(format!("{}{}", value, smallest));
    }

    parts.join(" ")
}
