// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `testmark convert` command - Annotate benchmark output.
//!
//! Reads benchmark output line by line and appends human-readable time and
//! memory conversions to every result line. Other lines pass through,
//! including lines that are not valid UTF-8, which are copied byte for byte.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use testmark_core::append_converted_line;

pub async fn execute(file: Option<&str>) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();

    let lines = match file {
        Some(path) => {
            let f = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening {}", path))?;
            convert_stream(BufReader::new(f), &mut stdout).await?
        }
        None => convert_stream(BufReader::new(tokio::io::stdin()), &mut stdout).await?,
    };

    tracing::debug!(lines, "Conversion complete");
    Ok(())
}

/// Convert every line of `input` into `output`. Returns the number of lines.
pub async fn convert_stream<R, W>(mut input: R, output: &mut W) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let read = input.read_until(b'\n', &mut buf).await.context("reading input")?;
        if read == 0 {
            break;
        }

        let line = strip_line_ending(&buf);
        match std::str::from_utf8(line) {
            Ok(text) => {
                let converted = append_converted_line(text);
                output.write_all(converted.as_bytes()).await?;
            }
            Err(_) => {
                tracing::debug!(line = count + 1, "Passing through non-UTF-8 line");
                output.write_all(line).await?;
            }
        }
        output.write_all(b"\n").await?;
        count += 1;
    }
    output.flush().await?;

    Ok(count)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_convert_stream() {
        let input = "goos: linux\nBenchmarkAllocOp-8   500000   512.0 ns/op   128 B/op\nPASS\n";
        let mut out = Vec::new();

        let count = convert_stream(input.as_bytes(), &mut out).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "goos: linux\nBenchmarkAllocOp-8\t500000\t512.0 ns/op\t128 B/op\t512ns\t128B\nPASS\n"
        );
    }

    #[tokio::test]
    async fn test_convert_empty_input() {
        let mut out = Vec::new();
        let count = convert_stream(&b""[..], &mut out).await.unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_passes_through() {
        let input = b"BenchmarkA-8 10 5 ns/op\nlog \xff\xfe garbage\nBenchmarkB-8 10 7 ns/op\n";
        let mut out = Vec::new();

        let count = convert_stream(&input[..], &mut out).await.unwrap();

        assert_eq!(count, 3);
        let mut want = b"BenchmarkA-8\t10\t5 ns/op\t5ns\n".to_vec();
        want.extend_from_slice(b"log \xff\xfe garbage\n");
        want.extend_from_slice(b"BenchmarkB-8\t10\t7 ns/op\t7ns\n");
        assert_eq!(out, want);
    }

    #[tokio::test]
    async fn test_crlf_and_missing_final_newline() {
        let input = "goos: linux\r\nBenchmarkC-2 4 9 ns/op";
        let mut out = Vec::new();

        let count = convert_stream(input.as_bytes(), &mut out).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "goos: linux\nBenchmarkC-2\t4\t9 ns/op\t9ns\n"
        );
    }
}
