//! Human-readable byte formatting
//!
//! Sizes are `u64` bytes end to end. Formatting uses scaled integer
//! arithmetic rather than floating point, so results stay exact for
//! byte counts past 2^53 where an `f64` would start dropping bits.

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Format a byte count as a human-readable size string.
///
/// Values below 1 KB print as whole bytes (`"0 B"`, `"512 B"`); larger
/// values print with exactly one decimal digit, rounded half-up, in the
/// largest fitting unit. GB is the cap, so very large counts render as
/// many GB rather than switching units.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < KB {
        return format!("{} B", bytes);
    }

    let (unit, label) = if bytes < MB {
        (KB, "KB")
    } else if bytes < GB {
        (MB, "MB")
    } else {
        (GB, "GB")
    };

    // Scale by ten and add half the unit before dividing: integer
    // round-half-up to one decimal, immune to binary rounding.
    let scaled = (bytes as u128 * 10 + unit as u128 / 2) / unit as u128;
    format!("{}.{} {}", scaled / 10, scaled % 10, label)
}
