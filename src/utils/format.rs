//! Pure formatting helpers for metric values.
//!
//! Fixed-decimal output rounds ties away from zero on the exact binary value,
//! so `5.25` renders as `5.3` the way a browser's `toFixed` does.

/// Currency glyph prefixed to abbreviated amounts.
pub const CURRENCY: &str = "₹";

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Enough digits to expose the exact expansion of any tie at low precision.
const EXACT_DIGITS: usize = 40;

/// Renders `value` with exactly `digits` decimals, rounding half away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut buf: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut i = buf.len();
        loop {
            if i == 0 {
                buf.insert(0, b'1');
                break;
            }
            i -= 1;
            if buf[i] == b'9' {
                buf[i] = b'0';
            } else {
                buf[i] += 1;
                break;
            }
        }
    }

    let split = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&buf[..split]));
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&buf[split..]));
    }
    out
}

/// Groups a digit string the Indian way: last three digits, then pairs.
fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Formats a whole count with Indian digit grouping, e.g. `12,00,000`.
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Grouped plain number with up to three decimals, trailing zeros dropped.
fn format_grouped(value: f64) -> String {
    let fixed = to_fixed(value.abs(), 3);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Abbreviates an amount into crore, lakh or thousand units.
///
/// | value       | output          |
/// |-------------|-----------------|
/// | `>= 1e7`    | `₹5.00Cr`       |
/// | `>= 1e5`    | `₹2.50L`        |
/// | `>= 1e3`    | `₹1.20K`        |
/// | otherwise   | `999` (grouped) |
///
/// Missing or non-finite input renders as `"0"`.
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return "0".to_string();
    };

    if value >= CRORE {
        format!("{CURRENCY}{}Cr", to_fixed(value / CRORE, 2))
    } else if value >= LAKH {
        format!("{CURRENCY}{}L", to_fixed(value / LAKH, 2))
    } else if value >= THOUSAND {
        format!("{CURRENCY}{}K", to_fixed(value / THOUSAND, 2))
    } else {
        format_grouped(value)
    }
}

/// Signed percentage with one decimal: `+5.3%`, `-2.0%`.
pub fn format_percentage(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", to_fixed(value, 1))
}

/// Wage as shown on the metric card: currency glyph plus the raw value.
pub fn format_wage(value: f64) -> String {
    format!("{CURRENCY}{value}")
}

/// Ratio of budget spent to budget allocated.
///
/// The progress bar is clamped to `[0, 1]`; the textual label is not, so an
/// overspent budget reads above 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utilization {
    ratio: f64,
}

impl Utilization {
    pub fn new(spent: f64, allocated: f64) -> Self {
        Self {
            ratio: spent / allocated.max(1.0),
        }
    }

    /// Unclamped spent/allocated ratio
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Fraction of the progress bar to fill
    pub fn bar_fraction(&self) -> f64 {
        if self.ratio.is_nan() {
            0.0
        } else {
            self.ratio.clamp(0.0, 1.0)
        }
    }

    /// CSS width of the progress bar
    pub fn bar_width(&self) -> String {
        format!("{}%", to_fixed(self.bar_fraction() * 100.0, 1))
    }

    pub fn percent_text(&self) -> String {
        format!("{}%", to_fixed(self.ratio * 100.0, 1))
    }

    pub fn label(&self) -> String {
        format!("{} utilized", self.percent_text())
    }
}
