use chrono::{NaiveTime, Timelike};

// 0º points along +x, the clock starts at the top
const TOP_OFFSET: i32 = 90;

/// 30 degrees per hour (i.e. 360/12).
pub fn hours_to_degrees(hours: i32) -> i32 {
    hours.wrapping_mul(30).wrapping_sub(TOP_OFFSET)
}

/// 6 degrees per minute (i.e. 360/60).
pub fn minutes_to_degrees(minutes: i32) -> i32 {
    minutes.wrapping_mul(6).wrapping_sub(TOP_OFFSET)
}

/// Splits a time into the `(hours, minutes)` shown by the clock.
pub fn clock_fields(time: NaiveTime) -> (i32, i32) {
    (time.hour() as i32, time.minute() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_angles() {
        assert_eq!(hours_to_degrees(0), -90);
        assert_eq!(hours_to_degrees(3), 0);
        assert_eq!(hours_to_degrees(6), 90);
        assert_eq!(hours_to_degrees(12), 270);
        assert_eq!(hours_to_degrees(15), 360);
    }

    #[test]
    fn minute_angles() {
        assert_eq!(minutes_to_degrees(0), -90);
        assert_eq!(minutes_to_degrees(15), 0);
        assert_eq!(minutes_to_degrees(30), 90);
        assert_eq!(minutes_to_degrees(45), 180);
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        assert_eq!(hours_to_degrees(-1), -120);
        assert_eq!(minutes_to_degrees(75), 360);
    }

    #[test]
    fn fields_from_time() {
        let time = NaiveTime::from_hms_opt(17, 42, 9).unwrap();
        assert_eq!(clock_fields(time), (17, 42));
    }
}
