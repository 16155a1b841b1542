//! Streak tracking system
//!
//! Streaks are recomputed from a goal's full set of active dates on every call,
//! so backfills and corrections are reflected no matter where they land.

use chrono::NaiveDate;

/// Streak values for a single goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakInfo {
    /// Consecutive active days ending today (or yesterday, see `compute`)
    pub current: u32,
    /// Longest run of consecutive active days in the whole history
    pub best: u32,
    /// Most recent active day on or before today
    pub last_activity_day: Option<NaiveDate>,
}

impl StreakInfo {
    /// Compute streaks from a strictly increasing sequence of active dates.
    ///
    /// The current streak ends today, or yesterday when today has no entry yet:
    /// a streak is not broken before the day is over. Dates after `today` are
    /// ignored for the current streak.
    pub fn compute(active_dates: &[NaiveDate], today: NaiveDate) -> Self {
        let best = longest_run(active_dates);

        let upto_today = active_dates.partition_point(|d| *d <= today);
        let past = &active_dates[..upto_today];

        let Some(&last) = past.last() else {
            return Self {
                current: 0,
                best,
                last_activity_day: None,
            };
        };

        // Active if activity was today or yesterday
        let current = if (today - last).num_days() <= 1 {
            let mut current = 1u32;
            for window in past.windows(2).rev() {
                if is_next_day(window[0], window[1]) {
                    current += 1;
                } else {
                    break;
                }
            }
            current
        } else {
            0 // Streak broken
        };

        Self {
            current,
            best,
            last_activity_day: Some(last),
        }
    }

    /// Check if the streak is still alive (activity today or yesterday)
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.last_activity_day
            .is_some_and(|last| (today - last).num_days() <= 1)
    }

    /// Streak is alive but today has not been logged yet
    pub fn at_risk(&self, today: NaiveDate) -> bool {
        self.current > 0 && self.last_activity_day != Some(today)
    }
}

fn is_next_day(earlier: NaiveDate, later: NaiveDate) -> bool {
    (later - earlier).num_days() == 1
}

/// Length of the longest maximal run of consecutive days
fn longest_run(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut best = 1u32;
    let mut run = 1u32;
    for window in dates.windows(2) {
        if is_next_day(window[0], window[1]) {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn days(ds: &[u32]) -> Vec<NaiveDate> {
        ds.iter().map(|d| day(*d)).collect()
    }

    #[test]
    fn test_empty_streaks() {
        let info = StreakInfo::compute(&[], day(10));
        assert_eq!(info, StreakInfo::default());
        assert!(!info.is_active(day(10)));
    }

    #[test]
    fn test_consecutive_days_ending_today() {
        let info = StreakInfo::compute(&days(&[8, 9, 10]), day(10));
        assert_eq!(info.current, 3);
        assert_eq!(info.best, 3);
        assert!(!info.at_risk(day(10)));
    }

    #[test]
    fn test_grace_period_counts_from_yesterday() {
        let info = StreakInfo::compute(&days(&[7, 8, 9]), day(10));
        assert_eq!(info.current, 3);
        assert!(info.is_active(day(10)));
        assert!(info.at_risk(day(10)));
    }

    #[test]
    fn test_broken_streak() {
        let info = StreakInfo::compute(&days(&[1, 2, 3, 4]), day(10));
        assert_eq!(info.current, 0);
        assert_eq!(info.best, 4);
        assert_eq!(info.last_activity_day, Some(day(4)));
    }

    #[test]
    fn test_current_stops_at_first_gap() {
        let info = StreakInfo::compute(&days(&[1, 2, 3, 4, 5, 8, 9, 10]), day(10));
        assert_eq!(info.current, 3);
        assert_eq!(info.best, 5);
    }

    #[test]
    fn test_backfill_merges_runs() {
        let before = StreakInfo::compute(&days(&[1, 2, 4, 5]), day(5));
        assert_eq!((before.current, before.best), (2, 2));

        let after = StreakInfo::compute(&days(&[1, 2, 3, 4, 5]), day(5));
        assert_eq!((after.current, after.best), (5, 5));
    }

    #[test]
    fn test_dates_after_today_ignored_for_current() {
        let info = StreakInfo::compute(&days(&[3, 4, 12]), day(5));
        assert_eq!(info.current, 2);
        assert_eq!(info.last_activity_day, Some(day(4)));
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ];
        let info = StreakInfo::compute(&dates, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(info.current, 3);
    }
}
