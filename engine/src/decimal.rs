/// Parse a value slice of the form `-?\d+(\.\d)?` into tenths.
///
/// `"12.3"` -> 123, `"-5.0"` -> -50, `"7"` -> 70. The grammar is a trusted
/// precondition of the input format; slices outside it are not validated.
pub fn parse_tenths(value: &[u8]) -> i64 {
    let (neg, digits) = match value.split_first() {
        Some((&b'-', rest)) => (true, rest),
        _ => (false, value),
    };

    let mut whole = 0i64;
    let mut tenths = 0i64;
    let mut iter = digits.iter();
    while let Some(&b) = iter.next() {
        if b == b'.' {
            if let Some(&d) = iter.next() {
                tenths = (d - b'0') as i64;
            }
            break;
        }
        whole = whole * 10 + (b - b'0') as i64;
    }

    let scaled = whole * 10 + tenths;
    if neg { -scaled } else { scaled }
}
