//! Gregorian calendar arithmetic.
//!
//! Months are 0-based throughout (`0` = January, `11` = December) to match
//! [`DateValue`](crate::DateValue) and the picker's browse position. Days are
//! 1-based. None of these functions fail: out-of-range months are folded
//! into adjacent years instead.

use chrono::Weekday;

/// Number of months in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Number of columns in a month grid.
pub const DAYS_PER_WEEK: u32 = 7;

/// Earliest year the picker can browse to. Inside chrono's date range.
pub const MIN_YEAR: i32 = -262_000;

/// Latest year the picker can browse to. Inside chrono's date range.
pub const MAX_YEAR: i32 = 262_000;

/// Check if a year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Get the number of days in a month.
///
/// Month indices past December are folded into following years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (year, month) = fold_month(year, month);
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Fold a possibly out-of-range month index into a valid `(year, month)`.
///
/// `-1` is December of the previous year, `12` is January of the next year,
/// and arbitrary offsets reduce the same way.
///
/// ```
/// use horizon_datepicker::calendar::normalize_month;
///
/// assert_eq!(normalize_month(2025, -1), (2024, 11));
/// assert_eq!(normalize_month(2025, 12), (2026, 0));
/// assert_eq!(normalize_month(2025, -25), (2022, 11));
/// ```
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let year_shift = month.div_euclid(MONTHS_PER_YEAR as i32);
    let month = month.rem_euclid(MONTHS_PER_YEAR as i32) as u32;
    (year.saturating_add(year_shift), month)
}

/// Move `(year, month)` by `delta` months.
///
/// `None` when the result falls outside [`MIN_YEAR`]`..=`[`MAX_YEAR`], so
/// callers can refuse the move instead of pinning the year.
///
/// ```
/// use horizon_datepicker::calendar::{MAX_YEAR, shift_month};
///
/// assert_eq!(shift_month(2025, 11, 1), Some((2026, 0)));
/// assert_eq!(shift_month(2025, 0, -13), Some((2023, 11)));
/// assert_eq!(shift_month(MAX_YEAR, 11, 1), None);
/// ```
pub fn shift_month(year: i32, month: u32, delta: i64) -> Option<(i32, u32)> {
    let per_year = i64::from(MONTHS_PER_YEAR);
    let total = (i64::from(year) * per_year)
        .checked_add(i64::from(month))?
        .checked_add(delta)?;
    let year = i32::try_from(total.div_euclid(per_year)).ok()?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    Some((year, total.rem_euclid(per_year) as u32))
}

/// Whether the picker can browse to `year`.
pub fn is_browsable_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

fn fold_month(year: i32, month: u32) -> (i32, u32) {
    if month < MONTHS_PER_YEAR {
        (year, month)
    } else {
        normalize_month(year, i32::try_from(month).unwrap_or(i32::MAX))
    }
}

/// Weekday of the first day of a month, `0` = Sunday through `6` = Saturday.
pub fn weekday_of_first(year: i32, month: u32) -> u32 {
    // Sakamoto's method, shifted so January and February count in the prior year.
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let (year, month) = fold_month(year, month);
    let mut y = i64::from(year);
    if month < 2 {
        y -= 1;
    }
    let index = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + OFFSETS[month as usize]
        + 1;
    index.rem_euclid(7) as u32
}

/// Number of blank cells before day 1 in a grid starting on `week_start`.
pub fn leading_blanks(year: i32, month: u32, week_start: Weekday) -> u32 {
    let first = weekday_of_first(year, month);
    (first + DAYS_PER_WEEK - week_start.num_days_from_sunday()) % DAYS_PER_WEEK
}

/// Cells of a month grid: leading blanks, the days, then trailing blanks up
/// to a whole number of weeks.
pub fn month_grid(year: i32, month: u32, week_start: Weekday) -> Vec<Option<u32>> {
    let blanks = leading_blanks(year, month, week_start);
    let days = days_in_month(year, month);
    let used = blanks + days;
    let total = used.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    let mut cells = Vec::with_capacity(total as usize);
    cells.extend((0..blanks).map(|_| None));
    cells.extend((1..=days).map(Some));
    cells.resize(total as usize, None);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 0), 31);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 3), 30);
        assert_eq!(days_in_month(2100, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2025, 11), 31);
    }

    #[test]
    fn test_days_in_month_folds_overflowing_month() {
        // Month 13 of 2023 is February 2024.
        assert_eq!(days_in_month(2023, 13), 29);
    }

    #[test]
    fn test_calendar_matches_chrono_1900_to_2100() {
        for year in 1900..=2100 {
            for month in 0..12u32 {
                let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
                assert_eq!(
                    weekday_of_first(year, month),
                    first.weekday().num_days_from_sunday(),
                    "weekday of {year}-{:02}-01",
                    month + 1
                );

                let (next_year, next_month) = normalize_month(year, month as i32 + 1);
                let next_first = NaiveDate::from_ymd_opt(next_year, next_month + 1, 1).unwrap();
                let length = next_first.signed_duration_since(first).num_days() as u32;
                assert_eq!(days_in_month(year, month), length, "length of {year}-{:02}", month + 1);
            }
        }
    }

    #[test]
    fn test_normalize_month() {
        assert_eq!(normalize_month(2025, 0), (2025, 0));
        assert_eq!(normalize_month(2025, 11), (2025, 11));
        assert_eq!(normalize_month(2025, -1), (2024, 11));
        assert_eq!(normalize_month(2025, 12), (2026, 0));
        assert_eq!(normalize_month(2025, 25), (2027, 1));
        assert_eq!(normalize_month(2025, -12), (2024, 0));
        assert_eq!(normalize_month(2025, -13), (2023, 11));
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(2025, 4, 0), Some((2025, 4)));
        assert_eq!(shift_month(2025, 11, 1), Some((2026, 0)));
        assert_eq!(shift_month(2025, 0, -1), Some((2024, 11)));
        assert_eq!(shift_month(2025, 5, 25), Some((2027, 6)));
    }

    #[test]
    fn test_shift_month_refuses_leaving_year_range() {
        assert_eq!(shift_month(MAX_YEAR, 11, 1), None);
        assert_eq!(shift_month(MIN_YEAR, 0, -1), None);
        assert_eq!(shift_month(2025, 4, i64::from(i32::MAX)), None);
        assert_eq!(shift_month(2025, 4, i64::from(i32::MIN)), None);
        assert_eq!(shift_month(MAX_YEAR, 10, 1), Some((MAX_YEAR, 11)));
        assert!(is_browsable_year(MIN_YEAR));
        assert!(!is_browsable_year(i32::MAX));
    }

    #[test]
    fn test_weekday_of_first_known_months() {
        // January 2025 starts on a Wednesday, June 2025 on a Sunday.
        assert_eq!(weekday_of_first(2025, 0), 3);
        assert_eq!(weekday_of_first(2025, 5), 0);
        // February 2024 starts on a Thursday.
        assert_eq!(weekday_of_first(2024, 1), 4);
    }

    #[test]
    fn test_leading_blanks_by_week_start() {
        // June 2025 starts on Sunday.
        assert_eq!(leading_blanks(2025, 5, Weekday::Sun), 0);
        assert_eq!(leading_blanks(2025, 5, Weekday::Mon), 6);
        // January 2025 starts on Wednesday.
        assert_eq!(leading_blanks(2025, 0, Weekday::Sun), 3);
        assert_eq!(leading_blanks(2025, 0, Weekday::Mon), 2);
    }

    #[test]
    fn test_month_grid_shape() {
        let grid = month_grid(2025, 4, Weekday::Sun);
        // May 2025 starts on Thursday: 4 blanks + 31 days = 35 cells.
        assert_eq!(grid.len(), 35);
        assert_eq!(&grid[..4], &[None, None, None, None]);
        assert_eq!(grid[4], Some(1));
        assert_eq!(grid[34], Some(31));

        // February 2026 starts on Sunday and fills exactly four weeks.
        let feb = month_grid(2026, 1, Weekday::Sun);
        assert_eq!(feb.len(), 28);
        assert_eq!(feb[0], Some(1));

        let padded = month_grid(2025, 0, Weekday::Sun);
        assert_eq!(padded.len() % 7, 0);
        assert_eq!(padded.last(), Some(&None));
    }
}
