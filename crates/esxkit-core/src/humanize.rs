// ── Byte humanizer ──

const UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// Render a byte count with binary prefixes, two decimals.
///
/// `0 -> "0.00 Bytes"`, `1024 -> "1.00 KB"`, `1536 -> "1.50 KB"`.
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub fn bytes_to_human(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = None;
    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = Some(next);
    }
    match unit {
        Some(prefix) => format!("{value:.2} {prefix}B"),
        None => format!("{value:.2} Bytes"),
    }
}
