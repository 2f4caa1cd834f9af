// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Parsing of benchmark report lines.
//!
//! Recognizes lines of the form
//! `BenchmarkName-8   1000000   31.2 ns/op   128 B/op   5 allocs/op`
//! and appends human-readable conversions of the time and memory columns.
//! Every column after `ns/op` is kept in its original order, so `MB/s` or
//! custom metrics survive conversion and `B/op` is found wherever it sits.

use std::sync::OnceLock;

use regex::Regex;

use crate::humanize::{human_bytes, human_ns};

/// One `<value> <unit>` column following `ns/op`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric<'a> {
    pub value: &'a str,
    /// Empty for a trailing value with no unit.
    pub unit: &'a str,
}

/// One parsed benchmark line. Numeric columns keep their original text so
/// they can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchLine<'a> {
    pub label: &'a str,
    pub count: &'a str,
    pub ns_per_op: &'a str,
    /// Columns after `ns/op`, in line order.
    pub metrics: Vec<Metric<'a>>,
}

fn bench_line_regex() -> &'static Regex {
    static BENCH_LINE_RE: OnceLock<Regex> = OnceLock::new();
    // Safety: this regex literal is guaranteed to compile
    BENCH_LINE_RE.get_or_init(|| {
        Regex::new(r"^(\S+)\s+(\d+)\s+([0-9.]+)\s+ns/op(?:\s+(.*))?$").unwrap()
    })
}

impl<'a> BenchLine<'a> {
    /// Parse a report line. Returns `None` for anything that is not a
    /// benchmark result line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = bench_line_regex().captures(line.trim())?;
        let text = |i: usize| caps.get(i).map(|m| m.as_str());

        let tokens: Vec<&'a str> = text(4).unwrap_or("").split_whitespace().collect();
        let metrics = tokens
            .chunks(2)
            .map(|pair| Metric {
                value: pair[0],
                unit: pair.get(1).copied().unwrap_or(""),
            })
            .collect();

        Some(Self {
            label: text(1)?,
            count: text(2)?,
            ns_per_op: text(3)?,
            metrics,
        })
    }

    /// Value of the first column with `unit`.
    pub fn metric(&self, unit: &str) -> Option<&'a str> {
        self.metrics.iter().find(|m| m.unit == unit).map(|m| m.value)
    }

    /// Text of the `B/op` column.
    pub fn bytes_per_op(&self) -> Option<&'a str> {
        self.metric("B/op")
    }

    /// Text of the `allocs/op` column.
    pub fn allocs_per_op(&self) -> Option<&'a str> {
        self.metric("allocs/op")
    }

    /// Time per operation, truncated to whole nanoseconds.
    pub fn ns_value(&self) -> i64 {
        parse_number(self.ns_per_op)
    }

    /// Bytes per operation, truncated to whole bytes.
    pub fn bytes_value(&self) -> Option<i64> {
        self.bytes_per_op().map(parse_number)
    }

    /// Render as tab-separated columns followed by the human conversions.
    pub fn to_converted(&self) -> String {
        let mut parts = vec![
            self.label.to_string(),
            self.count.to_string(),
            format!("{} ns/op", self.ns_per_op),
        ];
        for m in &self.metrics {
            if m.unit.is_empty() {
                parts.push(m.value.to_string());
            } else {
                parts.push(format!("{} {}", m.value, m.unit));
            }
        }

        parts.push(human_ns(self.ns_value()));
        if let Some(bytes) = self.bytes_value() {
            parts.push(human_bytes(bytes));
        }

        parts.join("\t")
    }
}

/// Append human-friendly conversions to a benchmark line. Any other line is
/// returned unchanged.
pub fn append_converted_line(line: &str) -> String {
    match BenchLine::parse(line) {
        Some(parsed) => parsed.to_converted(),
        None => line.to_string(),
    }
}

// Malformed numbers count as zero, matching how unparseable columns are shown.
fn parse_number(s: &str) -> i64 {
    s.parse::<f64>().map(|f| f as i64).unwrap_or(0)
}
