//! End-to-end tests for the log → streak → XP → quest → badge pipeline
//!
//! Each test drives a `Tracker` the way the CLI does and checks the derived
//! views through `TrackerQuery`.

mod common;

use common::{day, log_awards, state_with_goals};
use goalquest::progress::{
    BadgeId, HeatmapRange, HeatmapTarget, Intensity, LevelInfo, Rank, Tracker, TrackerPolicy,
    TrackerQuery, XpRewards,
};
use goalquest::{Attribute, GoalError};

#[test]
fn consecutive_logs_build_a_streak_of_equal_length() {
    let mut state = state_with_goals(&[("reading", Attribute::Int)]);
    let mut tracker = Tracker::new(&mut state);

    for d in 1..=7 {
        let outcome = tracker.log("reading", day(d), 10, day(d)).unwrap();
        assert_eq!(outcome.streak.current, d);
        assert_eq!(outcome.streak.best, d);
    }
}

#[test]
fn three_day_pushups_example() {
    let mut state = state_with_goals(&[("pushups", Attribute::Str)]);
    let mut tracker = Tracker::new(&mut state);

    let bonuses: Vec<u64> = [(1, 50), (2, 40), (3, 30)]
        .into_iter()
        .map(|(d, qty)| {
            tracker
                .log("pushups", day(d), qty, day(d))
                .unwrap()
                .xp
                .expect("positive log earns XP")
                .streak_bonus
        })
        .collect();

    assert_eq!(bonuses, vec![0, 2, 4]);

    let streak = TrackerQuery::new(&state).streaks("pushups", day(3)).unwrap();
    assert_eq!(streak.current, 3);
    assert_eq!(streak.best, 3);
    assert_eq!(log_awards(&state), 3);
}

#[test]
fn backfilling_a_gap_merges_runs() {
    let mut state = state_with_goals(&[("running", Attribute::Agi)]);
    let mut tracker = Tracker::new(&mut state);

    for d in [1, 2, 4, 5] {
        tracker.log("running", day(d), 3, day(5)).unwrap();
    }
    let before = TrackerQuery::new(&state).streaks("running", day(5)).unwrap();
    assert_eq!(before.best, 2);
    assert_eq!(before.current, 2);

    let mut tracker = Tracker::new(&mut state);
    let outcome = tracker.log("running", day(3), 3, day(5)).unwrap();
    assert_eq!(outcome.streak.best, 5);
    assert_eq!(outcome.streak.current, 5);
}

#[test]
fn correction_to_zero_shortens_the_streak() {
    let mut state = state_with_goals(&[("meditate", Attribute::Per)]);
    let mut tracker = Tracker::new(&mut state);

    for d in 1..=4 {
        tracker.log("meditate", day(d), 5, day(4)).unwrap();
    }

    let outcome = tracker.log("meditate", day(3), -5, day(4)).unwrap();
    assert_eq!(outcome.net, 0);
    assert!(!outcome.active);
    assert!(outcome.xp.is_none());
    assert_eq!(outcome.streak.current, 1);
    assert_eq!(outcome.streak.best, 2);

    let goal = state.goals.get("meditate").unwrap();
    assert_eq!(goal.active_dates(), vec![day(1), day(2), day(4)]);
}

#[test]
fn repeated_logs_accumulate_into_one_entry() {
    let mut state = state_with_goals(&[("water", Attribute::Vit)]);
    let mut tracker = Tracker::new(&mut state);

    tracker.log("water", day(2), 3, day(2)).unwrap();
    let outcome = tracker.log("water", day(2), 4, day(2)).unwrap();

    assert_eq!(outcome.net, 7);
    let goal = state.goals.get("water").unwrap();
    assert_eq!(goal.entries.len(), 1);
    assert_eq!(goal.quantity_on(day(2)), 7);
    // Both logs were positive with a positive net
    assert_eq!(log_awards(&state), 2);
}

#[test]
fn negative_first_log_is_inactive_and_earns_nothing() {
    let mut state = state_with_goals(&[("running", Attribute::Agi)]);
    let mut tracker = Tracker::new(&mut state);

    let outcome = tracker.log("running", day(3), -5, day(3)).unwrap();
    assert_eq!(outcome.net, -5);
    assert!(!outcome.active);
    assert!(outcome.xp.is_none());
    assert_eq!(outcome.xp_gained(), 0);
    assert_eq!(state.xp_ledger.total(), 0);
    assert_eq!(state.goals.total_active_entries(), 0);
}

#[test]
fn positive_delta_on_a_negative_day_earns_nothing_until_net_is_positive() {
    let mut state = state_with_goals(&[("running", Attribute::Agi)]);
    let mut tracker = Tracker::new(&mut state);

    tracker.log("running", day(3), -5, day(3)).unwrap();
    let still_negative = tracker.log("running", day(3), 2, day(3)).unwrap();
    assert!(still_negative.xp.is_none());

    let positive = tracker.log("running", day(3), 4, day(3)).unwrap();
    assert_eq!(positive.net, 1);
    assert!(positive.xp.is_some());
}

#[test]
fn daily_quest_is_granted_once_per_date() {
    let mut state = state_with_goals(&[
        ("pushups", Attribute::Str),
        ("running", Attribute::Agi),
        ("reading", Attribute::Int),
        ("water", Attribute::Vit),
        ("journal", Attribute::Per),
    ]);
    let mut tracker = Tracker::new(&mut state);

    let names = ["pushups", "running", "reading", "water"];
    let mut bonuses = Vec::new();
    for name in names {
        bonuses.push(tracker.log(name, day(6), 1, day(6)).unwrap().quest_bonus);
    }
    assert_eq!(bonuses, vec![false, false, false, true]);

    let fifth = tracker.log("journal", day(6), 1, day(6)).unwrap();
    assert!(!fifth.quest_bonus);
    assert!(fifth.quest.completed);

    assert_eq!(state.quests.len(), 1);
    assert_eq!(state.xp_ledger.total(), 5 * XpRewards::LOG + XpRewards::DAILY_QUEST);
    assert!(state.badges.contains_key(&BadgeId::FirstQuest));
    state.validate().unwrap();
}

#[test]
fn quest_bonus_survives_a_later_correction() {
    let mut state = state_with_goals(&[
        ("pushups", Attribute::Str),
        ("running", Attribute::Agi),
        ("reading", Attribute::Int),
        ("water", Attribute::Vit),
    ]);
    let mut tracker = Tracker::new(&mut state);

    for name in ["pushups", "running", "reading", "water"] {
        tracker.log(name, day(6), 1, day(6)).unwrap();
    }
    let xp_after_quest = state.xp_ledger.total();

    let mut tracker = Tracker::new(&mut state);
    tracker.log("water", day(6), -1, day(6)).unwrap();
    // Re-reaching four goals on the same date grants nothing new
    let again = tracker.log("water", day(6), 1, day(6)).unwrap();
    assert!(!again.quest_bonus);

    assert_eq!(state.quests.len(), 1);
    assert!(state.xp_ledger.total() >= xp_after_quest);
}

#[test]
fn badges_stay_unlocked_after_corrections() {
    let mut state = state_with_goals(&[("pushups", Attribute::Str)]);
    let mut tracker = Tracker::new(&mut state);

    for d in 1..=3 {
        tracker.log("pushups", day(d), 10, day(d)).unwrap();
    }
    assert!(state.badges.contains_key(&BadgeId::Streak3));
    assert!(state.badges.contains_key(&BadgeId::FirstLog));

    let mut tracker = Tracker::new(&mut state);
    tracker.log("pushups", day(2), -10, day(3)).unwrap();
    tracker.log("pushups", day(1), -10, day(3)).unwrap();
    tracker.log("pushups", day(3), -10, day(3)).unwrap();

    assert_eq!(state.goals.total_active_entries(), 0);
    assert!(state.badges.contains_key(&BadgeId::Streak3));
    assert!(state.badges.contains_key(&BadgeId::FirstLog));

    let profile = TrackerQuery::new(&state).profile();
    assert!(profile.has_badge(BadgeId::Streak3));
    assert_eq!(profile.total_logs, 0);
}

#[test]
fn experience_never_decreases() {
    let mut state = state_with_goals(&[("pushups", Attribute::Str)]);
    let mut tracker = Tracker::new(&mut state);

    let mut last = 0;
    for (d, delta) in [(1, 10), (2, 10), (2, -10), (1, -10), (3, 5), (3, -20)] {
        tracker.log("pushups", day(d), delta, day(3)).unwrap();
        let total = tracker.state().xp_ledger.total();
        assert!(total >= last, "XP dropped from {last} to {total}");
        last = total;
    }
}

#[test]
fn future_dates_are_rejected_without_changes() {
    let mut state = state_with_goals(&[("pushups", Attribute::Str)]);
    let before = state.clone();
    let mut tracker = Tracker::new(&mut state);

    let err = tracker.log("pushups", day(10), 5, day(9)).unwrap_err();
    assert!(matches!(err, GoalError::InvalidDate(_)));
    assert_eq!(state, before);
}

#[test]
fn archived_goals_keep_history_and_reject_logs_by_default() {
    let mut state = state_with_goals(&[("pushups", Attribute::Str)]);
    let mut tracker = Tracker::new(&mut state);

    tracker.log("pushups", day(1), 10, day(1)).unwrap();
    tracker.archive_goal("pushups", day(2)).unwrap();

    let err = tracker.log("pushups", day(2), 10, day(2)).unwrap_err();
    assert!(matches!(err, GoalError::ArchivedGoal(_)));
    assert_eq!(state.goals.get("pushups").unwrap().quantity_on(day(1)), 10);

    let policy = TrackerPolicy {
        allow_archived_logging: true,
    };
    let mut tracker = Tracker::with_policy(&mut state, policy);
    let outcome = tracker.log("pushups", day(2), 10, day(2)).unwrap();
    assert_eq!(outcome.streak.current, 2);
    assert!(!state.goals.get("pushups").unwrap().is_active());

    let mut tracker = Tracker::new(&mut state);
    tracker.restore_goal("pushups", day(3)).unwrap();
    assert!(state.goals.get("pushups").unwrap().is_active());
}

#[test]
fn set_quantity_replaces_the_days_total() {
    let mut state = state_with_goals(&[("reading", Attribute::Int)]);
    let mut tracker = Tracker::new(&mut state);

    tracker.log("reading", day(4), 12, day(4)).unwrap();
    let lowered = tracker.set_quantity("reading", day(4), 5, day(4)).unwrap();
    assert_eq!(lowered.net, 5);
    assert!(lowered.xp.is_none());

    let raised = tracker.set_quantity("reading", day(4), 20, day(4)).unwrap();
    assert_eq!(raised.net, 20);
    assert!(raised.xp.is_some());
}

#[test]
fn level_curve_example() {
    let info = LevelInfo::new(999);
    assert_eq!(info.level, 9);
    assert_eq!(info.rank, Rank::E);
    assert_eq!(info.rank.label(), "E-Rank");

    assert_eq!(LevelInfo::new(1000).level, 10);
    assert_eq!(LevelInfo::new(1000).rank, Rank::D);
}

#[test]
fn heatmap_buckets_follow_the_goals_best_day() {
    let mut state = state_with_goals(&[("pushups", Attribute::Str)]);
    let mut tracker = Tracker::new(&mut state);

    for (d, qty) in [(1, 100), (2, 10), (3, 30), (4, 60), (5, 80)] {
        tracker.log("pushups", day(d), qty, day(5)).unwrap();
    }

    let map = TrackerQuery::new(&state)
        .heatmap(
            &HeatmapTarget::Goal("pushups".to_string()),
            HeatmapRange::new(day(1), day(7)),
        )
        .unwrap();

    assert_eq!(map.max, 100);
    assert_eq!(map.get(day(1)), Intensity::Peak);
    assert_eq!(map.get(day(2)), Intensity::Low);
    assert_eq!(map.get(day(3)), Intensity::Medium);
    assert_eq!(map.get(day(4)), Intensity::High);
    assert_eq!(map.get(day(5)), Intensity::Peak);
    assert_eq!(map.get(day(6)), Intensity::None);
}

#[test]
fn profile_reflects_attribute_xp() {
    let mut state = state_with_goals(&[("pushups", Attribute::Str), ("reading", Attribute::Int)]);
    let mut tracker = Tracker::new(&mut state);

    tracker.log("pushups", day(1), 10, day(2)).unwrap();
    tracker.log("pushups", day(2), 10, day(2)).unwrap();
    tracker.log("reading", day(2), 10, day(2)).unwrap();

    let profile = TrackerQuery::new(&state).profile();
    assert_eq!(profile.attributes[&Attribute::Str], 10 + 12);
    assert_eq!(profile.attributes[&Attribute::Int], 10);
    assert_eq!(profile.attributes[&Attribute::Vit], 0);
    assert_eq!(profile.strongest_attribute(), Some(Attribute::Str));
    assert_eq!(profile.total_xp(), 32);
    assert_eq!(profile.level.level, 1);
}

#[test]
fn fifth_goal_unlocks_goal_set_badges_for_good() {
    let mut state = goalquest::TrackerState::default();
    let mut tracker = Tracker::new(&mut state);

    let goals = [
        ("pushups", Attribute::Str),
        ("running", Attribute::Agi),
        ("reading", Attribute::Int),
        ("water", Attribute::Vit),
    ];
    for (name, attribute) in goals {
        let outcome = tracker.add_goal(name, "units", attribute, day(1)).unwrap();
        assert!(outcome.badges.is_empty());
    }

    let fifth = tracker
        .add_goal("journal", "entries", Attribute::Per, day(2))
        .unwrap();
    let unlocked: Vec<BadgeId> = fifth.badges.iter().map(|b| b.badge.id).collect();
    assert_eq!(unlocked, vec![BadgeId::GoalCollector, BadgeId::AllRounder]);

    let archived = tracker.archive_goal("journal", day(3)).unwrap();
    assert!(archived.badges.is_empty());

    assert_eq!(state.badges.get(&BadgeId::GoalCollector), Some(&day(2)));
    assert_eq!(state.badges.get(&BadgeId::AllRounder), Some(&day(2)));
}
