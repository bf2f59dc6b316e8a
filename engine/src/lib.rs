//! Parallel `key;value` aggregation over a memory-mapped file.
//!
//! The input is mapped once, split into line-aligned chunks, scanned by a
//! rayon worker per chunk with no shared mutable state, merged
//! single-threaded, and rendered as one sorted summary line.

use std::path::Path;

use rayon::prelude::*;

mod chunk;
mod decimal;
mod mmap;
mod record;
mod report;
mod stats;

pub use chunk::plan;
pub use decimal::parse_tenths;
pub use mmap::{AccessPattern, Buffer, OpenError};
pub use record::Records;
pub use report::render;
pub use stats::{Aggregate, KeyMap, merge, scan_chunk};

/// Aggregate `path` with one worker per available hardware thread.
pub fn solve<P: AsRef<Path>>(path: P) -> Result<String, OpenError> {
    solve_with_workers(path, rayon::current_num_threads().max(1))
}

/// Aggregate `path` with an explicit worker count. The rendered summary is
/// identical for every worker count; only the chunking differs.
pub fn solve_with_workers<P: AsRef<Path>>(path: P, workers: usize) -> Result<String, OpenError> {
    let pattern = if workers <= 1 {
        AccessPattern::Sequential
    } else {
        AccessPattern::Random
    };
    let buffer = Buffer::open(path, pattern)?;
    let data = buffer.as_slice();

    let chunks = chunk::plan(data, workers);
    let parts: Vec<KeyMap> = chunks
        .into_par_iter()
        .map(|range| stats::scan_chunk(data, range))
        .collect();

    let merged = stats::merge(parts);
    Ok(report::render(&merged))
}
