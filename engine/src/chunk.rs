use memchr::memchr;
use std::ops::Range;

/// Split `data` into `workers` roughly equal, line-aligned ranges.
///
/// Every range except the last ends immediately after a newline, so no
/// worker ever begins or ends mid-record. The ranges are contiguous and
/// cover `[0, data.len())` exactly. An empty buffer yields an empty plan;
/// a worker count below one is treated as one.
pub fn plan(data: &[u8], workers: usize) -> Vec<Range<usize>> {
    if data.is_empty() {
        return Vec::new();
    }

    let workers = workers.max(1);
    let target = (data.len() / workers).max(1);

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0usize;
    while start < data.len() {
        let probe = start + target;
        if probe >= data.len() {
            ranges.push(start..data.len());
            break;
        }
        let end = match memchr(b'\n', &data[probe..]) {
            Some(off) => probe + off + 1,
            None => data.len(),
        };
        ranges.push(start..end);
        start = end;
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"Oslo;-2.0\nParis;12.3\nParis;7.8\nReykjavik;0.4\nOslo;1.1\n";

    fn assert_tiling(data: &[u8], ranges: &[Range<usize>]) {
        let mut cursor = 0;
        for r in ranges {
            assert_eq!(r.start, cursor, "ranges must be contiguous");
            assert!(r.end > r.start, "ranges must be non-empty");
            cursor = r.end;
        }
        assert_eq!(cursor, data.len(), "ranges must cover the buffer");
    }

    #[test]
    fn boundaries_fall_after_newlines() {
        for workers in [1, 2, 3, 4, 16, 64] {
            let ranges = plan(SAMPLE, workers);
            assert_tiling(SAMPLE, &ranges);
            for r in &ranges {
                if r.end != SAMPLE.len() {
                    assert_eq!(
                        SAMPLE[r.end - 1],
                        b'\n',
                        "interior boundary at {} splits a record (workers={workers})",
                        r.end
                    );
                }
            }
        }
    }

    #[test]
    fn single_worker_gets_everything() {
        assert_eq!(plan(SAMPLE, 1), vec![0..SAMPLE.len()]);
    }

    #[test]
    fn zero_workers_treated_as_one() {
        assert_eq!(plan(SAMPLE, 0), vec![0..SAMPLE.len()]);
    }

    #[test]
    fn empty_buffer_yields_empty_plan() {
        assert!(plan(b"", 8).is_empty());
    }

    #[test]
    fn more_workers_than_lines() {
        let data = b"a;1.0\nb;2.0\n";
        let ranges = plan(data, 64);
        assert_tiling(data, &ranges);
        for r in &ranges {
            if r.end != data.len() {
                assert_eq!(data[r.end - 1], b'\n');
            }
        }
    }

    #[test]
    fn unterminated_tail_stays_in_last_chunk() {
        let data = b"a;1.0\nb;2.0";
        let ranges = plan(data, 2);
        assert_tiling(data, &ranges);
        assert_eq!(ranges.last().unwrap().end, data.len());
    }
}
