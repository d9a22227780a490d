//! Pure display formatting for organization records.
//!
//! # Design
//! - Keep formatting total: any input renders something sensible.
//! - Avoid floats; abbreviated amounts are computed in integer tenths.
//! - Formatting is idempotent so already-shaped values pass through.

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;

/// Placeholder shown when a monetary amount is missing or zero.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Strip dashes and whitespace from an EIN.
#[must_use]
pub fn normalize_ein(ein: &str) -> String {
    ein.chars()
        .filter(|ch| *ch != '-' && !ch.is_whitespace())
        .collect()
}

/// Render an EIN as `##-#######` when it normalizes to nine digits.
///
/// Anything else (short, long, non-numeric) passes through normalized, so
/// formatting an already formatted EIN is a no-op.
#[must_use]
pub fn format_ein(ein: &str) -> String {
    let normalized = normalize_ein(ein);
    if normalized.len() == 9 && normalized.chars().all(|ch| ch.is_ascii_digit()) {
        format!("{}-{}", &normalized[..2], &normalized[2..])
    } else {
        normalized
    }
}

/// Abbreviate a dollar amount at the K/M/B thresholds.
///
/// Missing and zero amounts render as [`NOT_AVAILABLE`]. One decimal place,
/// truncated toward zero. Negative amounts carry the sign ahead of the
/// dollar figure.
#[must_use]
pub fn format_currency(amount: Option<i64>) -> String {
    let Some(value) = amount.filter(|value| *value != 0) else {
        return NOT_AVAILABLE.to_string();
    };
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let body = if magnitude >= BILLION {
        abbreviate(magnitude, BILLION, "B")
    } else if magnitude >= MILLION {
        abbreviate(magnitude, MILLION, "M")
    } else if magnitude >= THOUSAND {
        abbreviate(magnitude, THOUSAND, "K")
    } else {
        format!("${magnitude}")
    };
    format!("{sign}{body}")
}

fn abbreviate(magnitude: u64, unit: u64, suffix: &str) -> String {
    let whole = magnitude / unit;
    let tenths = (magnitude % unit) * 10 / unit;
    format!("${whole}.{tenths}{suffix}")
}

/// Group a count with thousands separators, e.g. `1234567` to `1,234,567`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Extract the year from an IRS ruling date (`YYYYMM`).
///
/// Returns `None` unless the first four characters form a plausible year.
#[must_use]
pub fn ruling_year(ruling_date: &str) -> Option<&str> {
    let trimmed = ruling_date.trim();
    let year = trimmed.get(..4)?;
    if !year.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    match year.parse::<u16>() {
        Ok(parsed) if (1800..=2100).contains(&parsed) => Some(year),
        _ => None,
    }
}
