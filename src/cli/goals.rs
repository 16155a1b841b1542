//! Goal management commands: add, list, archive, restore

use anyhow::Result;
use owo_colors::OwoColorize;

use goalquest::progress::GoalOutcome;
use goalquest::{Attribute, GoalStatus};

use super::render::print_badge;
use super::Context;

/// Track a new goal
pub fn add_command(ctx: &Context, name: &str, unit: &str, attr: &str) -> Result<()> {
    let attribute: Attribute = attr.parse()?;
    let today = ctx.today;

    let (outcome, _) = ctx.mutate(|tracker| tracker.add_goal(name, unit, attribute, today))?;

    println!(
        "Goal '{}' added ({}, {}). Start logging with: goalquest log {} +1",
        outcome.goal.name,
        outcome.goal.attribute.label(),
        outcome.goal.unit,
        outcome.goal.name
    );
    print_new_badges(&outcome);
    Ok(())
}

/// List all goals in creation order
pub fn list_command(ctx: &Context) -> Result<()> {
    let state = ctx.load_state()?;
    let goals = state.goals.list_all();

    if goals.is_empty() {
        println!("No goals tracked yet.");
        return Ok(());
    }

    println!("{}", "Your Goals:".magenta());
    for goal in goals {
        let line = format!(
            " - {} [{}] {} since {}",
            goal.name, goal.attribute, goal.unit, goal.created
        );
        match goal.status {
            GoalStatus::Active => println!("{line}"),
            GoalStatus::Archived => println!("{} {}", line.dimmed(), "(archived)".dimmed()),
        }
    }
    Ok(())
}

/// Pause a goal
pub fn archive_command(ctx: &Context, name: &str) -> Result<()> {
    let today = ctx.today;
    let (outcome, _) = ctx.mutate(|tracker| tracker.archive_goal(name, today))?;
    println!(
        "Goal '{}' archived. Its history is kept; restore it with: goalquest restore {}",
        outcome.goal.name, outcome.goal.name
    );
    print_new_badges(&outcome);
    Ok(())
}

/// Resume an archived goal
pub fn restore_command(ctx: &Context, name: &str) -> Result<()> {
    let today = ctx.today;
    let (outcome, _) = ctx.mutate(|tracker| tracker.restore_goal(name, today))?;
    println!("Goal '{}' restored.", outcome.goal.name);
    print_new_badges(&outcome);
    Ok(())
}

fn print_new_badges(outcome: &GoalOutcome) {
    for badge in &outcome.badges {
        println!("{}", "Badge unlocked!".cyan().bold());
        print_badge(badge);
    }
}
