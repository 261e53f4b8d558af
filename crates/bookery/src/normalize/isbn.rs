//! ISBN-10 to ISBN-13 derivation

/// Left-pad an ISBN with zeros to exactly 10 characters.
///
/// Spreadsheets routinely drop the leading zeros of numeric-looking cells;
/// this restores them.
pub fn pad_isbn10(isbn: &str) -> String {
    format!("{:0>10}", isbn)
}

/// Derive the ISBN-13 for an already-padded 10-character ISBN.
///
/// The candidate is the literal prefix `978` followed by the first nine
/// characters of the ISBN-10 (the tenth is the old check digit and is
/// discarded). The new check digit is a weighted digit sum modulo 10:
/// digits at odd positions (zero-indexed) count three times, digits at even
/// positions once.
///
/// Returns `None` if any of the nine carried characters is not a digit.
pub fn derive_isbn13(isbn10: &str) -> Option<String> {
    let mut candidate = String::with_capacity(13);
    candidate.push_str("978");
    candidate.extend(isbn10.chars().take(9));

    let digits: Vec<u32> = candidate
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()?;
    if digits.len() != 12 {
        return None;
    }

    let sum_even: u32 = 3 * (digits[1] + digits[3] + digits[5] + digits[7] + digits[9] + digits[11]);
    let sum_odd: u32 = digits[0] + digits[2] + digits[4] + digits[6] + digits[8] + digits[10];
    let remainder = (sum_even + sum_odd) % 10;
    let check = if remainder != 0 { 10 - remainder } else { 0 };

    candidate.push_str(&check.to_string());
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_isbns_to_ten() {
        assert_eq!(pad_isbn10("307476464"), "0307476464");
        assert_eq!(pad_isbn10("0307476464"), "0307476464");
        assert_eq!(pad_isbn10(""), "0000000000");
    }

    #[test]
    fn derives_known_isbn13() {
        assert_eq!(derive_isbn13("0307476464").as_deref(), Some("9780307476463"));
    }

    #[test]
    fn zero_remainder_yields_zero_check_digit() {
        // 978 + 400000000: weighted sum is 50, so the check digit must be
        // 0, not 10.
        assert_eq!(derive_isbn13("4000000001").as_deref(), Some("9784000000000"));
    }

    #[test]
    fn result_is_always_thirteen_numeric_chars() {
        for isbn in ["0307476464", "1608195228", "0000000000", "9999999999"] {
            let isbn13 = derive_isbn13(isbn).unwrap();
            assert_eq!(isbn13.len(), 13);
            assert!(isbn13.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn non_digit_input_is_rejected() {
        // Real ISBN-10s may end in an X check digit; only the first nine
        // characters matter, so that still derives.
        assert!(derive_isbn13("043942089X").is_some());
        assert_eq!(derive_isbn13("04394208XX"), None);
        assert_eq!(derive_isbn13("no isbn"), None);
    }
}
