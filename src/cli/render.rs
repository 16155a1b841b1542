//! Terminal rendering for heatmaps and progression output

use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;

use goalquest::progress::{
    GoalReport, Heatmap, Intensity, LevelInfo, LogOutcome, ProgressEvent, UnlockedBadge,
};

const BLOCK: &str = "■";
const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Gray for empty days, then a dark-to-bright green scale
fn cell(intensity: Intensity) -> String {
    let (r, g, b) = match intensity {
        Intensity::None => (48, 48, 48),
        Intensity::Low => (0, 95, 0),
        Intensity::Medium => (0, 135, 0),
        Intensity::High => (0, 175, 0),
        Intensity::Peak => (0, 255, 0),
    };
    BLOCK.truecolor(r, g, b).to_string()
}

/// Draw a 7-row (Sunday first) by N-week grid
pub fn print_heatmap(title: &str, map: &Heatmap) {
    println!("\n{}", title.magenta().bold());
    println!(
        "Tracking period: {} to {}\n",
        map.range.start, map.range.end
    );

    for (offset, label) in DAY_LABELS.iter().enumerate() {
        let mut row = format!("{label:<4}");
        let mut date = map.range.start + Duration::days(offset as i64);
        while date <= map.range.end {
            row.push_str(&cell(map.get(date)));
            row.push(' ');
            date += Duration::weeks(1);
        }
        println!("{row}");
    }
}

pub fn print_legend() {
    let cells: Vec<String> = Intensity::SCALE.iter().map(|i| cell(*i)).collect();
    println!("\nLess {} More", cells.join(" "));
}

pub fn print_report(report: &GoalReport<'_>, today: NaiveDate) {
    let goal = report.goal;
    let streak = &report.streak;

    let mut line = format!(
        "Streak: {} day(s) (best {}) · {} active day(s) · {} {} total",
        streak.current, streak.best, report.active_days, report.total_quantity, goal.unit
    );
    if let Some((date, qty)) = report.best_day {
        line.push_str(&format!(" · best day {date} ({qty} {})", goal.unit));
    }
    println!("{line}");

    if streak.at_risk(today) {
        println!(
            "{}",
            "Not logged today yet: log before midnight to keep the streak".yellow()
        );
    } else if streak.best > 0 && !streak.is_active(today) {
        println!("{}", "Streak broken. Log today to start a new one.".dimmed());
    }
}

/// XP bar like `[██████░░░░] 60%`
pub fn progress_bar(level: &LevelInfo, width: usize) -> String {
    let filled = (level.progress_to_next() * width as f32).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:>3.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        level.progress_to_next() * 100.0
    )
}

pub fn print_badge(badge: &UnlockedBadge) {
    println!(
        "  {} {} - {} (unlocked {})",
        badge.badge.icon,
        badge.badge.name.bold(),
        badge.badge.description,
        badge.unlocked_on
    );
}

pub fn print_log_outcome(outcome: &LogOutcome, unit: &str) {
    let day_label = if outcome.active { "active" } else { "inactive" };
    println!(
        "Logged for '{}' on {}. Total: {} {} ({})",
        outcome.goal, outcome.date, outcome.net, unit, day_label
    );

    match outcome.xp {
        Some(xp) if xp.streak_bonus > 0 => println!(
            "{} (+{} base, +{} streak bonus)",
            format!("+{} XP", xp.total()).green().bold(),
            xp.base,
            xp.streak_bonus
        ),
        Some(xp) => println!("{}", format!("+{} XP", xp.total()).green().bold()),
        None => println!("{}", "No XP for this log".dimmed()),
    }

    println!(
        "Streak: {} day(s) (best {})",
        outcome.streak.current, outcome.streak.best
    );

    let quest = &outcome.quest;
    if outcome.quest_bonus {
        println!(
            "{}",
            "Daily quest complete: Preparation! +50 XP".yellow().bold()
        );
    } else if !quest.completed && quest.active_goals > 0 {
        println!(
            "Daily quest: {}/{} goals logged, {} to go",
            quest.active_goals.min(quest.required),
            quest.required,
            quest.remaining()
        );
    }

    for event in &outcome.events {
        match event {
            ProgressEvent::BadgeUnlocked(badge) => {
                println!("{}", "Badge unlocked!".cyan().bold());
                print_badge(badge);
            }
            ProgressEvent::LevelUp(up) => {
                println!(
                    "{}",
                    format!("LEVEL UP! {} → {}", up.old_level, up.new_level)
                        .magenta()
                        .bold()
                );
                if up.rank_changed() {
                    println!(
                        "{}",
                        format!("Rank up: {} → {}", up.old_rank, up.new_rank)
                            .magenta()
                            .bold()
                    );
                }
            }
            ProgressEvent::XpAwarded { .. } | ProgressEvent::QuestCompleted { .. } => {}
        }
    }
}
