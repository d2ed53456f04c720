use crate::api::SlotStatus;
use crate::models::catalog::TimeWindow;
use crate::models::time::TimeOfDay;

/// Minutes before a window opens during which it counts as `upcoming`.
/// Inclusive: exactly 20 minutes out is still `upcoming`.
pub const UPCOMING_WINDOW_MINUTES: f64 = 20.0;

/// Classify a catalog time window against the current time of day.
///
/// Malformed `HH:MM:SS` strings classify as `unavailable` rather than
/// erroring: one bad slot must never abort the whole request.
pub fn classify_window(now: TimeOfDay, window: &TimeWindow) -> SlotStatus {
    let (Ok(start), Ok(end)) = (
        TimeOfDay::parse(&window.start),
        TimeOfDay::parse(&window.end),
    ) else {
        return SlotStatus::Unavailable;
    };
    classify(now, start, end)
}

/// Classify `now` against a `[start, end]` window.
///
/// `available` when `start <= now <= end` (inclusive both ends; at the
/// exact start boundary `available` wins over `upcoming`), `upcoming`
/// when the window opens within the next [`UPCOMING_WINDOW_MINUTES`],
/// `unavailable` otherwise.
pub fn classify(now: TimeOfDay, start: TimeOfDay, end: TimeOfDay) -> SlotStatus {
    if start <= now && now <= end {
        return SlotStatus::Available;
    }
    let minutes_until = start.minutes() - now.minutes();
    if minutes_until > 0.0 && minutes_until <= UPCOMING_WINDOW_MINUTES {
        SlotStatus::Upcoming
    } else {
        SlotStatus::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay::from_hms(h, m, s).unwrap()
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_inside_window_is_available() {
        assert_eq!(
            classify(t(9, 30, 0), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Available
        );
    }

    #[test]
    fn test_start_boundary_is_available() {
        // available wins over upcoming at time_until == 0
        assert_eq!(
            classify(t(9, 0, 0), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Available
        );
    }

    #[test]
    fn test_end_boundary_is_available() {
        assert_eq!(
            classify(t(10, 0, 0), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Available
        );
    }

    #[test]
    fn test_twenty_minutes_out_is_upcoming() {
        assert_eq!(
            classify(t(8, 40, 0), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Upcoming
        );
    }

    #[test]
    fn test_twenty_one_minutes_out_is_unavailable() {
        assert_eq!(
            classify(t(8, 39, 0), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Unavailable
        );
    }

    #[test]
    fn test_fifteen_minutes_out_is_upcoming() {
        assert_eq!(
            classify(t(8, 45, 0), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Upcoming
        );
    }

    #[test]
    fn test_after_end_is_unavailable() {
        assert_eq!(
            classify(t(10, 0, 1), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Unavailable
        );
    }

    #[test]
    fn test_second_resolution() {
        // 19 minutes 59 seconds out is within the upcoming window
        assert_eq!(
            classify(t(8, 40, 1), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Upcoming
        );
        // 20 minutes 1 second out is not
        assert_eq!(
            classify(t(8, 39, 59), t(9, 0, 0), t(10, 0, 0)),
            SlotStatus::Unavailable
        );
    }

    #[test]
    fn test_classify_window_parses_catalog_strings() {
        let w = window("09:00:00", "10:00:00");
        assert_eq!(classify_window(t(9, 30, 0), &w), SlotStatus::Available);
        assert_eq!(classify_window(t(8, 45, 0), &w), SlotStatus::Upcoming);
        assert_eq!(classify_window(t(11, 0, 0), &w), SlotStatus::Unavailable);
    }

    #[test]
    fn test_malformed_window_fails_closed() {
        assert_eq!(
            classify_window(t(9, 30, 0), &window("garbage", "10:00:00")),
            SlotStatus::Unavailable
        );
        assert_eq!(
            classify_window(t(9, 30, 0), &window("09:00:00", "")),
            SlotStatus::Unavailable
        );
    }

    proptest! {
        /// classify is total and pure: one of the three states, and the
        /// same inputs always produce the same output.
        #[test]
        fn prop_classify_total_and_deterministic(
            now in 0u32..86_400,
            start in 0u32..86_400,
            len in 0u32..86_400,
        ) {
            let now = TimeOfDay::from_hms(now / 3600, (now / 60) % 60, now % 60).unwrap();
            let start_t = TimeOfDay::from_hms(start / 3600, (start / 60) % 60, start % 60).unwrap();
            let end = (start + len).min(86_399);
            let end_t = TimeOfDay::from_hms(end / 3600, (end / 60) % 60, end % 60).unwrap();

            let first = classify(now, start_t, end_t);
            let second = classify(now, start_t, end_t);
            prop_assert_eq!(first, second);
            prop_assert!(matches!(
                first,
                SlotStatus::Available | SlotStatus::Upcoming | SlotStatus::Unavailable
            ));
        }

        /// available and upcoming never overlap: upcoming requires now
        /// strictly before start.
        #[test]
        fn prop_upcoming_is_strictly_before_start(
            now in 0u32..86_400,
            start in 0u32..86_400,
        ) {
            let now_t = TimeOfDay::from_hms(now / 3600, (now / 60) % 60, now % 60).unwrap();
            let start_t = TimeOfDay::from_hms(start / 3600, (start / 60) % 60, start % 60).unwrap();
            if classify(now_t, start_t, start_t) == SlotStatus::Upcoming {
                prop_assert!(now < start);
            }
        }
    }
}
