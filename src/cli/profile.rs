//! Profile command implementation

use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;

use goalquest::progress::ProfileSummary;

use super::render::{print_badge, progress_bar};
use super::{query, Context};

const BAR_WIDTH: usize = 20;

/// Show level, rank, attribute XP, badges and today's quest
pub fn profile_command(ctx: &Context, json: bool) -> Result<()> {
    let state = ctx.load_state()?;
    let query = query(&state);
    let profile = query.profile();

    if json {
        let summary = ProfileSummary::from(&profile);
        let out =
            serde_json::to_string_pretty(&summary).with_context(|| "Failed to serialize profile")?;
        println!("{out}");
        return Ok(());
    }

    let level = &profile.level;
    println!(
        "{}",
        format!("Level {} · {}", level.level, level.rank.label())
            .magenta()
            .bold()
    );
    println!(
        "{} {} XP total, {} XP to level {}",
        progress_bar(level, BAR_WIDTH),
        level.total_xp,
        level.xp_to_next(),
        level.level + 1
    );

    println!("\n{}", "Attributes".bold());
    let strongest = profile.strongest_attribute();
    for (attribute, xp) in &profile.attributes {
        let line = format!("  {:<4}{:>7} XP  {}", attribute.as_str(), xp, attribute.label());
        if Some(*attribute) == strongest {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }

    println!(
        "\nGoals: {} active, {} archived · Logs: {} · Quests completed: {}",
        profile.active_goals, profile.archived_goals, profile.total_logs, profile.quests_completed
    );

    let quest = query.quest_progress(ctx.today);
    if quest.completed {
        println!("{}", "Today's quest: complete".yellow());
    } else {
        println!(
            "Today's quest: {}/{} goals logged, {} to go",
            quest.active_goals.min(quest.required),
            quest.required,
            quest.remaining()
        );
    }

    println!("\n{}", "Badges".bold());
    if profile.badges.is_empty() {
        println!("  {}", "None yet. Log something to earn your first.".dimmed());
    }
    for badge in &profile.badges {
        print_badge(badge);
    }

    Ok(())
}
