//! Formatting utilities for file sizes shown next to file pickers.

/// Units used by [`format_file_size`], in ascending order.
pub const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const UNIT_BASE: u64 = 1024;

/// Index into [`SIZE_UNITS`] for a byte count.
///
/// Largest unit whose scaled value is at least 1, capped at GB.
pub fn size_unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut threshold = UNIT_BASE;
    while index < SIZE_UNITS.len() - 1 && bytes >= threshold {
        index += 1;
        threshold = threshold.saturating_mul(UNIT_BASE);
    }
    index
}

/// Format a byte count for display (e.g., "1.5 KB", "16 MB", "0 Bytes").
///
/// The scaled value is rounded half-up to two decimals and trailing zeros are
/// dropped.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let index = size_unit_index(bytes);
    let unit = (UNIT_BASE as u128).pow(index as u32);
    let hundredths = (bytes as u128 * 200 + unit) / (2 * unit);
    let fixed = format!("{}.{:02}", hundredths / 100, hundredths % 100);
    format!("{} {}", trim_decimals(&fixed), SIZE_UNITS[index])
}

/// Strip trailing zeros (and a dangling dot) from a fixed-point string.
fn trim_decimals(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1034), "1.01 KB");
        assert_eq!(format_file_size(16 * 1024 * 1024), "16 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(format_file_size(1152), "1.13 KB");
        assert_eq!(format_file_size(1408), "1.38 KB");
        assert_eq!(format_file_size(1664), "1.63 KB");
        assert_eq!(format_file_size(1024 * 1024 + 128 * 1024), "1.13 MB");
    }

    #[test]
    fn test_units_cap_at_gigabytes() {
        let five_tib = 5 * 1024u64.pow(4);
        assert_eq!(format_file_size(five_tib), "5120 GB");
        assert_eq!(size_unit_index(u64::MAX), 3);
    }

    #[test]
    fn test_unit_non_decreasing() {
        let mut last = 0;
        let mut bytes = 0u64;
        while bytes < 8 * 1024u64.pow(3) {
            let index = size_unit_index(bytes);
            assert!(index >= last, "unit went down at {} bytes", bytes);
            last = index;
            bytes = bytes * 3 + 7;
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(size_unit_index(1023), 0);
        assert_eq!(size_unit_index(1024), 1);
        assert_eq!(size_unit_index(1024 * 1024 - 1), 1);
        assert_eq!(size_unit_index(1024 * 1024), 2);
    }
}
