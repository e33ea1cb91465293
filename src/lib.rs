//! probe_normalizer library: flattens raw HTTP/TLS probe results into records
//! ready for indexing.
//!
//! A probe result is a JSON tree whose shape depends on how far the probe got:
//! it may stop at the connect phase, carry a TLS handshake, follow a redirect
//! chain of any length, or (for proxy probes) hold a CONNECT and a GET response.
//! This crate walks that tree without ever failing on missing substructure and
//! produces either a flat record or an explicit skip.
//!
//! Pipeline, per record:
//! 1. [`resolve`]: fail-soft path lookup into the raw record
//! 2. [`tls`]: `tls` / `tls_initial` summaries and a deduplicated certificate set
//! 3. [`response`]: status, body, digest, title and canonical headers
//! 4. [`assemble`]: drop-empty assembly into an [`Outcome`]
//!
//! # Example
//!
//! ```
//! use probe_normalizer::{transform, Outcome};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "data": {"http": {"response": {
//!         "status_code": 200,
//!         "body": "<html><title>Welcome</title></html>",
//!         "headers": {"server": ["nginx"], "date": ["Mon, 01 Jan 2024 00:00:00 GMT"]}
//!     }}}
//! });
//!
//! match transform(&raw) {
//!     Outcome::Emit(output) => {
//!         let json = serde_json::to_value(&output.record).unwrap();
//!         assert_eq!(json["title"], "Welcome");
//!         assert_eq!(json["headers"], json!({"server": "nginx"}));
//!     }
//!     Outcome::Skip(reason) => panic!("unexpected skip: {reason}"),
//! }
//! ```
//!
//! Transforms are stateless; a host may call them from any number of threads.


pub mod assemble;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod resolve;
pub mod response;
pub mod tls;
pub mod transform;
mod utils;

// Re-export public API
pub use assemble::{OutputRecord, Outcome, TransformOutput};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::SkipReason;
pub use run::{process_stream, run_batch, BatchReport};
pub use transform::{transform, Transform, TransformKind};

// Batch runner over JSON Lines input
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info, warn};
    use std::collections::HashMap;
    use std::fs::File;
    use std::io::{self, BufRead, BufReader, BufWriter, Write};
    use std::time::Instant;
    use strum::IntoEnumIterator;

    use crate::assemble::Outcome;
    use crate::config::{Config, LOGGING_INTERVAL, STDIN_PATH};
    use crate::error_handling::{InputError, ProcessingStats, SkipReason};
    use crate::transform::Transform;
    use crate::utils::sanitize::preview_line;
    use crate::utils::IgnoreBrokenPipe;

    /// Results of a batch run.
    #[derive(Debug, Clone, PartialEq)]
    pub struct BatchReport {
        /// Non-blank input lines read
        pub total_records: usize,
        /// Records written to the output
        pub emitted: usize,
        /// Records that produced no output, by reason
        pub skipped: HashMap<SkipReason, usize>,
        /// Lines that were not valid JSON
        pub invalid: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl BatchReport {
        pub fn total_skipped(&self) -> usize {
            self.skipped.values().sum()
        }

        pub fn skip_count(&self, reason: SkipReason) -> usize {
            self.skipped.get(&reason).copied().unwrap_or(0)
        }

        fn from_stats(stats: &ProcessingStats, elapsed_seconds: f64) -> Self {
            BatchReport {
                total_records: stats.total(),
                emitted: stats.emitted(),
                skipped: SkipReason::iter()
                    .map(|reason| (reason, stats.get_skip_count(reason)))
                    .collect(),
                invalid: stats.invalid_input(),
                elapsed_seconds,
            }
        }
    }

    /// Runs the configured transform over a JSON Lines file.
    ///
    /// Reads one raw record per line from `config.file` (`-` for stdin) and
    /// writes one `{"protocol": ..., "subprotocol": ..., "transformed": ...,
    /// "certificates": [...]}` object per emitted record to `config.output`
    /// (stdout if unset).
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be opened or read, the output
    /// cannot be written, or `fail_on_invalid` is set and any line was not
    /// valid JSON. Skipped records are never errors.
    pub fn run_batch(config: &Config) -> Result<BatchReport> {
        let reader: Box<dyn BufRead> = if config.file.as_os_str() == STDIN_PATH {
            info!("Reading records from stdin");
            Box::new(BufReader::new(io::stdin().lock()))
        } else {
            let file = File::open(&config.file).with_context(|| {
                format!("Failed to open input file: {}", config.file.display())
            })?;
            Box::new(BufReader::new(file))
        };

        let writer: Box<dyn Write> = match config.output.as_ref() {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(IgnoreBrokenPipe::new(io::stdout().lock())),
        };

        let transform = config.transform.build();
        info!("Applying transform {}", transform.name());

        let report = process_stream(reader, writer, transform.as_ref())?;

        if config.fail_on_invalid && report.invalid > 0 {
            anyhow::bail!(
                "{} input line(s) were not valid JSON (--fail-on-invalid)",
                report.invalid
            );
        }

        Ok(report)
    }

    /// Transforms every JSON line of `reader` and writes emitted records to `writer`.
    ///
    /// Blank lines are ignored. A line that is not valid JSON is logged,
    /// counted and skipped; it does not stop the stream.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures on `reader` or `writer`.
    pub fn process_stream<R, W>(
        reader: R,
        mut writer: W,
        transform: &dyn Transform,
    ) -> Result<BatchReport>
    where
        R: BufRead,
        W: Write,
    {
        let start = Instant::now();
        let stats = ProcessingStats::new();

        for (idx, line) in reader.split(b'\n').enumerate() {
            let line_no = idx + 1;
            let line = line.with_context(|| format!("Failed to read input line {line_no}"))?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let record: serde_json::Value = match serde_json::from_slice(&line) {
                Ok(record) => record,
                Err(source) => {
                    let err = InputError::InvalidJson {
                        line: line_no,
                        source,
                    };
                    warn!("{err}; skipping: {}", preview_line(&line));
                    stats.increment_invalid_input();
                    continue;
                }
            };

            let outcome = transform.transform(&record);
            stats.record(&outcome);
            match outcome {
                Outcome::Emit(output) => {
                    serde_json::to_writer(&mut writer, &output)
                        .with_context(|| format!("Failed to write record from line {line_no}"))?;
                    writer
                        .write_all(b"\n")
                        .context("Failed to write record separator")?;
                }
                Outcome::Skip(reason) => {
                    debug!("Line {line_no}: skipped ({reason})");
                }
            }

            if line_no % LOGGING_INTERVAL == 0 {
                info!(
                    "Progress: {} line(s), {} emitted, {} skipped",
                    line_no,
                    stats.emitted(),
                    stats.total_skipped()
                );
            }
        }

        writer.flush().context("Failed to flush output")?;
        stats.log_summary();

        Ok(BatchReport::from_stats(
            &stats,
            start.elapsed().as_secs_f64(),
        ))
    }
}
