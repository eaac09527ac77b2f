//! Formatting helper functions and tests
//!
//! Pure helpers for player and dashboard display strings, testable
//! independently of Dioxus components.

/// Formats a playback clock as `MM:SS`, or `HH:MM:SS` once the content is
/// an hour or longer. Invalid and not-yet-known durations render `00:00`.
///
/// # Examples
/// ```
/// use minivinci_client::presentation::helpers::format_helpers::format_clock;
///
/// assert_eq!(format_clock(75.0), "01:15");
/// assert_eq!(format_clock(3725.0), "01:02:05");
/// assert_eq!(format_clock(f64::NAN), "00:00");
/// ```
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }

    let total = seconds as u64;
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours:02}:{mins:02}:{secs:02}")
    } else {
        format!("{mins:02}:{secs:02}")
    }
}

/// Bucket a picture height into the label shown in the player corner.
/// Standard heights collapse to their common names; anything below 480
/// lines shows the raw height.
///
/// # Examples
/// ```
/// use minivinci_client::presentation::helpers::format_helpers::resolution_label;
///
/// assert_eq!(resolution_label(1080), "1080p");
/// assert_eq!(resolution_label(810), "720p");
/// assert_eq!(resolution_label(360), "360p");
/// ```
pub fn resolution_label(height: u32) -> String {
    if height >= 1080 {
        "1080p".to_string()
    } else if height >= 720 {
        "720p".to_string()
    } else if height >= 480 {
        "480p".to_string()
    } else {
        format!("{height}p")
    }
}

/// Whole-number percentage for progress bars and their captions.
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value.clamp(0.0, 100.0))
}

/// Course length for catalog cards.
pub fn format_course_minutes(minutes: i64) -> String {
    format!("{minutes}分钟")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod clock {
        use super::*;

        #[test]
        fn under_an_hour_is_minutes_and_seconds() {
            assert_eq!(format_clock(0.0), "00:00");
            assert_eq!(format_clock(5.2), "00:05");
            assert_eq!(format_clock(75.0), "01:15");
            assert_eq!(format_clock(3599.0), "59:59");
        }

        #[test]
        fn an_hour_and_up_gains_an_hours_field() {
            assert_eq!(format_clock(3600.0), "01:00:00");
            assert_eq!(format_clock(3725.0), "01:02:05");
            assert_eq!(format_clock(36_125.0), "10:02:05");
        }

        #[test]
        fn invalid_inputs_render_zero() {
            assert_eq!(format_clock(f64::NAN), "00:00");
            assert_eq!(format_clock(f64::INFINITY), "00:00");
            assert_eq!(format_clock(-4.0), "00:00");
        }
    }

    mod resolution {
        use super::*;

        #[test]
        fn standard_heights_use_common_names() {
            assert_eq!(resolution_label(2160), "1080p");
            assert_eq!(resolution_label(1080), "1080p");
            assert_eq!(resolution_label(720), "720p");
            assert_eq!(resolution_label(480), "480p");
        }

        #[test]
        fn in_between_heights_round_down_to_a_tier() {
            assert_eq!(resolution_label(1079), "720p");
            assert_eq!(resolution_label(719), "480p");
        }

        #[test]
        fn low_heights_show_the_raw_value() {
            assert_eq!(resolution_label(360), "360p");
            assert_eq!(resolution_label(240), "240p");
        }
    }

    mod percent {
        use super::*;

        #[test]
        fn rounds_to_whole_numbers() {
            assert_eq!(format_percent(62.5), "62%");
            assert_eq!(format_percent(62.51), "63%");
            assert_eq!(format_percent(0.0), "0%");
        }

        #[test]
        fn clamps_out_of_range_values() {
            assert_eq!(format_percent(140.0), "100%");
            assert_eq!(format_percent(-5.0), "0%");
        }
    }

    #[test]
    fn course_minutes_read_naturally() {
        assert_eq!(format_course_minutes(45), "45分钟");
    }
}
