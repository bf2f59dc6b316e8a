use ahash::AHashMap;
use std::ops::Range;

use crate::decimal::parse_tenths;
use crate::record::Records;

/// Per-key running statistics, all values in tenths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aggregate {
    pub count: u64,
    pub sum: i64,
    pub min: i64,
    pub max: i64,
}

impl Aggregate {
    pub fn new(value: i64) -> Self {
        Aggregate { count: 1, sum: value, min: value, max: value }
    }

    pub fn add(&mut self, value: i64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn fold(&mut self, other: &Aggregate) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

pub type KeyMap = AHashMap<Box<[u8]>, Aggregate>;

/// Scan one chunk into a local map. Lookups go through the borrowed key
/// slice; the key bytes are copied only on first sight.
pub fn scan_chunk(buf: &[u8], range: Range<usize>) -> KeyMap {
    let mut map = KeyMap::with_capacity(1024);
    for (key, value) in Records::new(buf, range) {
        let value = parse_tenths(value);
        if let Some(agg) = map.get_mut(key) {
            agg.add(value);
        } else {
            map.insert(Box::from(key), Aggregate::new(value));
        }
    }
    map
}

/// Fold per-worker maps into one. Additive on count/sum, min/max on the
/// extrema, so the result does not depend on the order of the parts.
pub fn merge<I>(parts: I) -> KeyMap
where
    I: IntoIterator<Item = KeyMap>,
{
    let mut merged = KeyMap::new();
    for part in parts {
        for (key, agg) in part {
            if let Some(existing) = merged.get_mut(key.as_ref()) {
                existing.fold(&agg);
            } else {
                merged.insert(key, agg);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(buf: &[u8]) -> KeyMap {
        scan_chunk(buf, 0..buf.len())
    }

    fn sorted(map: &KeyMap) -> Vec<(&[u8], &Aggregate)> {
        let mut entries: Vec<_> = map.iter().map(|(k, v)| (k.as_ref(), v)).collect();
        entries.sort_unstable_by_key(|&(key, _)| key);
        entries
    }

    #[test]
    fn aggregates_repeated_keys_in_place() {
        let map = scan(b"Paris;12.3\nParis;7.8\nOslo;-2.0\n");
        assert_eq!(map.len(), 2);

        let paris = map.get(&b"Paris"[..]).unwrap();
        assert_eq!(*paris, Aggregate { count: 2, sum: 201, min: 78, max: 123 });

        let oslo = map.get(&b"Oslo"[..]).unwrap();
        assert_eq!(*oslo, Aggregate { count: 1, sum: -20, min: -20, max: -20 });
    }

    #[test]
    fn merge_is_commutative_and_associative() {
        let a = scan(b"x;1.0\ny;2.0\n");
        let b = scan(b"x;5.0\nz;-1.0\n");
        let c = scan(b"x;3.0\ny;-7.5\n");

        let abc = merge([a.clone(), b.clone(), c.clone()]);
        let cab = merge([c.clone(), a.clone(), b.clone()]);
        let ab_then_c = merge([merge([a, b]), c]);

        assert_eq!(sorted(&abc), sorted(&cab));
        assert_eq!(sorted(&abc), sorted(&ab_then_c));

        let x = abc.get(&b"x"[..]).unwrap();
        assert_eq!(*x, Aggregate { count: 3, sum: 90, min: 10, max: 50 });
    }

    #[test]
    fn merge_of_disjoint_parts_is_a_union() {
        let merged = merge([scan(b"a;1.0\n"), scan(b"b;2.0\n")]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get(&b"a"[..]).unwrap().sum, 10);
        assert_eq!(merged.get(&b"b"[..]).unwrap().sum, 20);
    }

    #[test]
    fn key_spread_over_every_chunk() {
        let buf = b"k;1.0\nk;2.0\nk;3.0\nk;-4.0\n";
        let whole = merge([scan(buf)]);

        let ranges = crate::chunk::plan(buf, 4);
        let parts: Vec<KeyMap> = ranges.into_iter().map(|r| scan_chunk(buf, r)).collect();
        let merged = merge(parts);

        assert_eq!(sorted(&merged), sorted(&whole));
        let k = merged.get(&b"k"[..]).unwrap();
        assert_eq!(k.count, 4);
        assert_eq!(k.min, -40);
        assert_eq!(k.max, 30);
    }
}
