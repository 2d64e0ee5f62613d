//! Number/unit splitting for numeric words.
//!
//! `10px` → number `10`, unit `px`; `-.5e3%` → number `-.5e3`, unit `%`;
//! `1em` → number `1`, unit `em` (an `e` only starts an exponent when a
//! digit, optionally signed, follows it). Words that do not start with a
//! number (`#1e3`, `auto`, `-webkit-box`) are not dimensions.

/// A numeric word split into its number and unit parts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Dimension<'a> {
    pub number: &'a str,
    /// Trailing unit text; empty for a bare number.
    pub unit: &'a str,
}

/// Split a word into number and unit, or `None` if it is not numeric.
pub fn parse_dimension(word: &str) -> Option<Dimension<'_>> {
    let bytes = word.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j.min(bytes.len())..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    Some(Dimension {
        number: &word[..i],
        unit: &word[i..],
    })
}

#[inline]
fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests;
