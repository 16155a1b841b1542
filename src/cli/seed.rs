//! Seed command: a demo goal with a year of random history

use anyhow::{bail, Result};
use chrono::{Duration, NaiveDate};
use rand::Rng;

use goalquest::Attribute;

use super::Context;

const DEMO_GOAL: &str = "demo";
const DEMO_DAYS: i64 = 365;
const ACTIVITY_CHANCE: f64 = 0.7;

/// Generate the demo goal, logging oldest day first so streaks build up
pub fn seed_command(ctx: &Context) -> Result<()> {
    let state = ctx.load_state()?;
    if state.goals.contains(DEMO_GOAL) {
        bail!("Goal '{DEMO_GOAL}' already exists. Archive or rename it before seeding again.");
    }

    let today = ctx.today;
    let start = today - Duration::days(DEMO_DAYS - 1);
    let mut rng = rand::thread_rng();
    let mut history: Vec<(NaiveDate, i64)> = Vec::new();
    for offset in 0..DEMO_DAYS {
        if rng.gen_bool(ACTIVITY_CHANCE) {
            history.push((start + Duration::days(offset), rng.gen_range(1..=10)));
        }
    }

    let (logged, state) = ctx.mutate(|tracker| {
        tracker.add_goal(DEMO_GOAL, "times", Attribute::Vit, start)?;
        for (date, qty) in &history {
            tracker.log(DEMO_GOAL, *date, *qty, *date)?;
        }
        Ok(history.len())
    })?;

    println!(
        "Demo data generated: {logged} active day(s), {} XP total. Run: goalquest show {DEMO_GOAL}",
        state.xp_ledger.total()
    );
    Ok(())
}
