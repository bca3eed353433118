//! Chart callout placement.

use chrono::{DateTime, Utc};

/// Where a selection callout sits relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPosition {
    TopLeading,
    TopTrailing,
    BottomLeading,
    BottomTrailing,
    Leading,
    Trailing,
}

/// Pick the callout corner for a selected point so the label stays inside
/// the plot: points in the top quartile get it below, bottom quartile
/// above, and the horizontal side flips at the time frame midpoint. The
/// rules are checked in order and the first hit wins; a value that
/// compares with nothing (NaN) falls through to leading.
pub fn place(
    measure_date: DateTime<Utc>,
    value: f32,
    half_time: DateTime<Utc>,
    p25: f32,
    p75: f32,
) -> LabelPosition {
    let early = measure_date < half_time;
    if value >= p75 {
        if early {
            LabelPosition::BottomTrailing
        } else {
            LabelPosition::BottomLeading
        }
    } else if value <= p25 {
        if early {
            LabelPosition::TopTrailing
        } else {
            LabelPosition::TopLeading
        }
    } else if value > p25 && value < p75 {
        if early {
            LabelPosition::Trailing
        } else {
            LabelPosition::Leading
        }
    } else {
        LabelPosition::Leading
    }
}

#[cfg(test)]
mod tests {
    use super::{place, LabelPosition};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn half_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 7, 18, 0, 0, 0).unwrap()
    }

    fn early() -> DateTime<Utc> {
        half_time() - Duration::hours(1)
    }

    fn late() -> DateTime<Utc> {
        half_time() + Duration::hours(1)
    }

    #[test]
    fn high_values_drop_the_label_below() {
        assert_eq!(
            place(early(), 90.0, half_time(), 25.0, 75.0),
            LabelPosition::BottomTrailing
        );
        assert_eq!(
            place(late(), 90.0, half_time(), 25.0, 75.0),
            LabelPosition::BottomLeading
        );
    }

    #[test]
    fn low_values_lift_the_label_above() {
        assert_eq!(
            place(early(), 10.0, half_time(), 25.0, 75.0),
            LabelPosition::TopTrailing
        );
        assert_eq!(
            place(late(), 10.0, half_time(), 25.0, 75.0),
            LabelPosition::TopLeading
        );
    }

    #[test]
    fn mid_values_only_flip_sides() {
        assert_eq!(
            place(early(), 50.0, half_time(), 25.0, 75.0),
            LabelPosition::Trailing
        );
        assert_eq!(
            place(late(), 50.0, half_time(), 25.0, 75.0),
            LabelPosition::Leading
        );
    }

    #[test]
    fn quartile_boundaries_count_as_extreme() {
        assert_eq!(
            place(late(), 75.0, half_time(), 25.0, 75.0),
            LabelPosition::BottomLeading
        );
        assert_eq!(
            place(late(), 25.0, half_time(), 25.0, 75.0),
            LabelPosition::TopLeading
        );
    }

    #[test]
    fn exactly_at_half_time_is_not_early() {
        assert_eq!(
            place(half_time(), 90.0, half_time(), 25.0, 75.0),
            LabelPosition::BottomLeading
        );
    }

    #[test]
    fn incomparable_value_defaults_to_leading() {
        assert_eq!(
            place(early(), f32::NAN, half_time(), 25.0, 75.0),
            LabelPosition::Leading
        );
    }

    #[test]
    fn degenerate_quartiles_still_match_in_order() {
        // p25 == p75 == value hits the first rule, not the default.
        assert_eq!(
            place(late(), 50.0, half_time(), 50.0, 50.0),
            LabelPosition::BottomLeading
        );
    }
}
