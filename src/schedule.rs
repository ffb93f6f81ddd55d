use chrono::{Datelike, Duration, NaiveDate};

/// First Sunday on or after `date` (`date` itself when it is a Sunday).
fn first_sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    let offset = (7 - date.weekday().num_days_from_sunday()) % 7;
    date + Duration::days(i64::from(offset))
}

/// Ordered Sundays in `[start, end]`, both bounds inclusive.
pub fn enumerate_sundays(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut instances = Vec::new();
    let mut current = first_sunday_on_or_after(start);
    while current <= end {
        instances.push(current);
        current += Duration::days(7);
    }
    instances
}

pub fn count_sundays(start: NaiveDate, end: NaiveDate) -> usize {
    if start > end {
        return 0;
    }
    let first = first_sunday_on_or_after(start);
    if first > end {
        return 0;
    }
    ((end - first).num_days() / 7 + 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn march_2024_window_has_five_sundays() {
        let start = date(2024, 3, 3);
        let end = date(2024, 3, 31);
        assert_eq!(count_sundays(start, end), 5);
        let expected = vec![
            date(2024, 3, 3),
            date(2024, 3, 10),
            date(2024, 3, 17),
            date(2024, 3, 24),
            date(2024, 3, 31),
        ];
        assert_eq!(enumerate_sundays(start, end), expected);
    }

    #[test]
    fn single_sunday_period_yields_one_instance() {
        let sunday = date(2024, 3, 10);
        assert_eq!(enumerate_sundays(sunday, sunday), vec![sunday]);
        assert_eq!(count_sundays(sunday, sunday), 1);
    }

    #[test]
    fn period_without_a_sunday_is_empty() {
        let start = date(2024, 3, 4);
        let end = date(2024, 3, 9);
        assert!(enumerate_sundays(start, end).is_empty());
        assert_eq!(count_sundays(start, end), 0);
    }

    #[test]
    fn inverted_period_is_empty() {
        let start = date(2024, 3, 31);
        let end = date(2024, 3, 3);
        assert!(enumerate_sundays(start, end).is_empty());
        assert_eq!(count_sundays(start, end), 0);
    }

    #[test]
    fn count_matches_enumeration_across_offsets() {
        let end = date(2024, 6, 30);
        for day in 1..=30 {
            let start = date(2024, 5, day);
            let instances = enumerate_sundays(start, end);
            assert_eq!(count_sundays(start, end), instances.len());
            assert!(instances
                .iter()
                .all(|d| d.weekday() == Weekday::Sun && *d >= start && *d <= end));
        }
    }
}
