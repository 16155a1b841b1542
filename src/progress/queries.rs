//! Read-only queries over the tracker state
//!
//! Everything here is derived on the fly; nothing is written back.

use chrono::NaiveDate;

use super::heatmap::{Heatmap, HeatmapRange, HeatmapTarget};
use super::profile::PlayerProfile;
use super::quest::QuestProgress;
use super::streaks::StreakInfo;
use crate::domain::{Goal, GoalError};
use crate::state::TrackerState;

/// Per-goal summary for display
#[derive(Debug, Clone)]
pub struct GoalReport<'a> {
    pub goal: &'a Goal,
    pub streak: StreakInfo,
    /// Dates with a positive net quantity
    pub active_days: usize,
    /// Sum of positive daily quantities
    pub total_quantity: i64,
    /// Best single day, if any day was active
    pub best_day: Option<(NaiveDate, i64)>,
}

/// Query interface for the tracker state
pub struct TrackerQuery<'s> {
    state: &'s TrackerState,
}

impl<'s> TrackerQuery<'s> {
    pub fn new(state: &'s TrackerState) -> Self {
        Self { state }
    }

    /// Current and longest streak for one goal
    pub fn streaks(&self, name: &str, today: NaiveDate) -> Result<StreakInfo, GoalError> {
        let goal = self.state.goals.get(name)?;
        Ok(StreakInfo::compute(&goal.active_dates(), today))
    }

    /// Summary for one goal
    pub fn goal_report(&self, name: &str, today: NaiveDate) -> Result<GoalReport<'s>, GoalError> {
        let goal = self.state.goals.get(name)?;
        Ok(Self::report_for(goal, today))
    }

    /// Summaries for every active goal, in creation order
    pub fn active_reports(&self, today: NaiveDate) -> Vec<GoalReport<'s>> {
        self.state
            .goals
            .list_active()
            .into_iter()
            .map(|g| Self::report_for(g, today))
            .collect()
    }

    fn report_for(goal: &'s Goal, today: NaiveDate) -> GoalReport<'s> {
        let active: Vec<(NaiveDate, i64)> = goal
            .entries
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(d, q)| (*d, *q))
            .collect();

        let dates: Vec<NaiveDate> = active.iter().map(|(d, _)| *d).collect();
        // Earliest date wins ties
        let best_day = active
            .iter()
            .copied()
            .fold(None, |best: Option<(NaiveDate, i64)>, (d, q)| match best {
                Some((_, bq)) if bq >= q => best,
                _ => Some((d, q)),
            });

        GoalReport {
            goal,
            streak: StreakInfo::compute(&dates, today),
            active_days: active.len(),
            total_quantity: active
                .iter()
                .fold(0i64, |acc, (_, q)| acc.saturating_add(*q)),
            best_day,
        }
    }

    /// Derived player profile
    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile::derive(self.state)
    }

    /// Daily quest progress for `date`
    pub fn quest_progress(&self, date: NaiveDate) -> QuestProgress {
        QuestProgress::evaluate(&self.state.goals, &self.state.quests, date)
    }

    /// Heatmap data for one goal or the active-goal aggregate
    pub fn heatmap(
        &self,
        target: &HeatmapTarget,
        range: HeatmapRange,
    ) -> Result<Heatmap, GoalError> {
        match target {
            HeatmapTarget::Goal(name) => {
                let goal = self.state.goals.get(name)?;
                Ok(Heatmap::for_goal(goal, range))
            }
            HeatmapTarget::AllActive => {
                let goals = self.state.goals.list_active();
                Ok(Heatmap::aggregate(&goals, range))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Attribute;
    use crate::progress::{Intensity, Tracker};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, d).unwrap()
    }

    fn sample_state() -> TrackerState {
        let mut state = TrackerState::default();
        let mut tracker = Tracker::new(&mut state);
        tracker
            .add_goal("pushups", "reps", Attribute::Str, day(1))
            .unwrap();
        tracker
            .add_goal("reading", "pages", Attribute::Int, day(1))
            .unwrap();
        for (d, qty) in [(1, 20), (2, 40), (3, 40), (5, 10)] {
            tracker.log("pushups", day(d), qty, day(d)).unwrap();
        }
        tracker.log("reading", day(5), 12, day(5)).unwrap();
        tracker.archive_goal("reading", day(5)).unwrap();
        state
    }

    #[test]
    fn test_goal_report() {
        let state = sample_state();
        let query = TrackerQuery::new(&state);
        let report = query.goal_report("pushups", day(6)).unwrap();

        assert_eq!(report.active_days, 4);
        assert_eq!(report.total_quantity, 110);
        assert_eq!(report.best_day, Some((day(2), 40)));
        assert_eq!(report.streak.current, 1);
        assert_eq!(report.streak.best, 3);
    }

    #[test]
    fn test_active_reports_skip_archived() {
        let state = sample_state();
        let reports = TrackerQuery::new(&state).active_reports(day(6));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].goal.name, "pushups");
    }

    #[test]
    fn test_heatmap_targets() {
        let state = sample_state();
        let query = TrackerQuery::new(&state);
        let range = HeatmapRange::new(day(1), day(5));

        let goal_map = query
            .heatmap(&HeatmapTarget::Goal("pushups".into()), range)
            .unwrap();
        assert_eq!(goal_map.get(day(2)), Intensity::Peak);
        assert_eq!(goal_map.get(day(4)), Intensity::None);

        let all = query.heatmap(&HeatmapTarget::AllActive, range).unwrap();
        assert_eq!(all.max, 1);
        assert_eq!(all.get(day(5)), Intensity::Peak);

        assert!(matches!(
            query.heatmap(&HeatmapTarget::Goal("swim".into()), range),
            Err(GoalError::GoalNotFound(_))
        ));
    }
}
