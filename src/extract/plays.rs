/// Fraction digits beyond this cannot change a count scaled by at most a million.
const MAX_FRACTION_DIGITS: usize = 12;

/// Parse an abbreviated play count such as `12.5K`, `3M` or `842`.
///
/// The leading run of digits and dots is the number; a `K` or `M` right after
/// it (either case) scales by a thousand or a million. Fractions are truncated.
/// Anything unparsable counts as zero plays.
pub fn parse_play_count(text: &str) -> u64 {
    let text = text.trim();
    let number_len = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, rest) = text.split_at(number_len);

    let multiplier = match rest.chars().next() {
        Some('k' | 'K') => 1_000,
        Some('m' | 'M') => 1_000_000,
        _ => 1,
    };

    scale_decimal(number, multiplier).unwrap_or(0)
}

fn scale_decimal(number: &str, multiplier: u128) -> Option<u64> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return None;
    }

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    let mantissa: u128 = format!("{}{}", whole, fraction).parse().ok()?;
    let divisor = 10u128.checked_pow(fraction.len() as u32)?;

    u64::try_from(mantissa.checked_mul(multiplier)? / divisor).ok()
}
