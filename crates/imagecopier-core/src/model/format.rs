/// Text helpers for the summary, status bar and progress label.

/// Render a byte total with binary units (1 KB = 1024 B). Gigabytes carry two
/// decimals, smaller units one.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    if unit + 1 == UNITS.len() {
        format!("{value:.2} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Group the digits of `count` in threes, e.g. `12,345`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Label shown next to the progress bar, e.g. `Progress: 3/10 files`.
pub fn format_progress(current: u64, total: u64) -> String {
    format!(
        "Progress: {}/{} files",
        format_count(current),
        format_count(total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
        assert_eq!(format_size(5 * 1_099_511_627_776), "5120.00 GB");
    }

    #[test]
    fn counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(100_000), "100,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn progress_label() {
        assert_eq!(format_progress(0, 0), "Progress: 0/0 files");
        assert_eq!(format_progress(12, 4_000), "Progress: 12/4,000 files");
    }
}
