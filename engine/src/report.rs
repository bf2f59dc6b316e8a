use std::fmt::Write as FmtWrite;

use crate::stats::{Aggregate, KeyMap};

#[inline]
fn mean_tenths(sum_scaled: i64, count: u64) -> i64 {
    let denom = count as i64;
    if sum_scaled >= 0 {
        (sum_scaled + (denom / 2)) / denom
    } else {
        -((-sum_scaled + (denom / 2)) / denom)
    }
}

fn push_tenths(out: &mut String, tenths: i64) {
    let (sign, t) = if tenths < 0 { ("-", -tenths) } else { ("", tenths) };
    let _ = write!(out, "{sign}{}.{}", t / 10, t % 10);
}

/// Render the merged map as `{k1=min/avg/max k2=.../...}` with keys in
/// ascending byte order, one decimal digit per field, and a trailing
/// newline. The average rounds half away from zero at render time.
pub fn render(merged: &KeyMap) -> String {
    let mut entries: Vec<(&[u8], &Aggregate)> =
        merged.iter().map(|(k, v)| (k.as_ref(), v)).collect();
    entries.sort_unstable_by_key(|&(key, _)| key);

    let mut out = String::with_capacity(entries.len().saturating_mul(32) + 3);
    out.push('{');
    for (idx, (key, agg)) in entries.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(&String::from_utf8_lossy(key));
        out.push('=');
        push_tenths(&mut out, agg.min);
        out.push('/');
        push_tenths(&mut out, mean_tenths(agg.sum, agg.count));
        out.push('/');
        push_tenths(&mut out, agg.max);
    }
    out.push_str("}\n");
    out
}
