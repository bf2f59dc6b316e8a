use memchr::memchr;
use std::ops::Range;

/// Single forward scan over one chunk, yielding `(key, value)` slice pairs.
///
/// Both slices borrow from the mapped buffer; nothing is copied. A trailing
/// fragment with no `;` before the chunk end terminates the scan and is
/// dropped. A record with an empty value is skipped.
pub struct Records<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Records<'a> {
    pub fn new(buf: &'a [u8], range: Range<usize>) -> Self {
        let Range { mut start, end } = range;
        // A start that is not on a record boundary belongs to the previous
        // chunk's last record; advance past it.
        if start != 0 && start < end && buf[start - 1] != b'\n' {
            start = match memchr(b'\n', &buf[start..end]) {
                Some(off) => start + off + 1,
                None => end,
            };
        }
        Records { buf, pos: start, end }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.end {
            let rest = &self.buf[self.pos..self.end];
            let sep = memchr(b';', rest)?;
            let key = &rest[..sep];
            let after = &rest[sep + 1..];

            let (value, advance) = match memchr(b'\n', after) {
                Some(nl) => (&after[..nl], sep + 1 + nl + 1),
                None => (after, rest.len()),
            };
            self.pos += advance;

            if value.is_empty() {
                continue;
            }
            return Some((key, value));
        }
        None
    }
}
