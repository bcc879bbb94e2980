//! Compact number formatting for the list rows.

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Formats a population as a short human string.
///
/// - `>= 1_000_000` → millions with one decimal (`"1.5M"`, `"1.0M"`)
/// - `>= 1_000` → whole thousands (`"1K"`, `"250K"`)
/// - otherwise the plain integer
///
/// Rounding is half-up and done in integer arithmetic, so `999_500` renders
/// as `"1000K"` rather than crossing into the millions bucket.
pub fn format_population(n: u64) -> String {
    if n >= MILLION {
        let tenths = n.saturating_add(MILLION / 20) / (MILLION / 10);
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if n >= THOUSAND {
        format!("{}K", (n + THOUSAND / 2) / THOUSAND)
    } else {
        n.to_string()
    }
}
