//! Human-readable labels for frames.

/// Short label for a number of primes.
///
/// Plain below a thousand, whole thousands (`"12k"`) below a million and
/// millions with up to two decimals (`"1.5M"`, `"2.0M"`, `"1.25M"`) above.
/// Rounding is half-to-even.
pub fn prime_count_label(n: u64) -> String {
    if n >= 1_000_000 {
        let millions = (n as f64 / 10_000.0).round_ties_even() / 100.0;
        let mut text = format!("{:.2}", millions);
        if text.ends_with('0') {
            text.pop();
        }
        format!("{}M", text)
    } else if n >= 1_000 {
        format!("{}k", (n as f64 / 1_000.0).round_ties_even() as u64)
    } else {
        n.to_string()
    }
}

/// Title shown above the frame for prefix length `n`.
pub fn frame_title(n: u64) -> String {
    format!("prime gap line for {} primes", prime_count_label(n))
}

/// Progress through a run, as a percentage of `total` frames.
pub fn progress_percent(index: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    100.0 * index as f64 / total as f64
}

/// Default export file name, `gap_<frames>frames_<step>i.<extension>`.
pub fn output_file_name(frames: u64, step: u64, extension: &str) -> String {
    format!("gap_{}frames_{}i.{}", frames, step, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_are_plain() {
        assert_eq!(prime_count_label(0), "0");
        assert_eq!(prime_count_label(999), "999");
    }

    #[test]
    fn thousands_round_to_whole_k() {
        assert_eq!(prime_count_label(1_000), "1k");
        assert_eq!(prime_count_label(12_400), "12k");
        assert_eq!(prime_count_label(12_600), "13k");
        assert_eq!(prime_count_label(999_000), "999k");
    }

    #[test]
    fn thousands_round_half_to_even() {
        assert_eq!(prime_count_label(2_500), "2k");
        assert_eq!(prime_count_label(3_500), "4k");
    }

    #[test]
    fn millions_keep_two_decimals_at_most() {
        assert_eq!(prime_count_label(1_000_000), "1.0M");
        assert_eq!(prime_count_label(1_500_000), "1.5M");
        assert_eq!(prime_count_label(1_250_000), "1.25M");
        assert_eq!(prime_count_label(2_345_678), "2.35M");
        assert_eq!(prime_count_label(10_000_000), "10.0M");
    }

    #[test]
    fn title_embeds_label() {
        assert_eq!(frame_title(5_000), "prime gap line for 5k primes");
        assert_eq!(frame_title(42), "prime gap line for 42 primes");
    }

    #[test]
    fn progress_is_fraction_of_frames() {
        assert_eq!(progress_percent(0, 100), 0.0);
        assert_eq!(progress_percent(25, 100), 25.0);
        assert_eq!(progress_percent(1, 4), 25.0);
        assert_eq!(progress_percent(0, 0), 100.0);
    }

    #[test]
    fn file_name_pattern() {
        assert_eq!(output_file_name(100, 1000, "json"), "gap_100frames_1000i.json");
        assert_eq!(output_file_name(3, 7, "csv"), "gap_3frames_7i.csv");
    }
}
