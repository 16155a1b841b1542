//! Show command implementation

use anyhow::Result;

use goalquest::progress::{HeatmapRange, HeatmapTarget};

use super::render::{print_heatmap, print_legend, print_report};
use super::{query, Context};

/// Show one goal, every active goal, or the combined heatmap
pub fn show_command(ctx: &Context, name: Option<&str>, overall: bool) -> Result<()> {
    let state = ctx.load_state()?;
    let query = query(&state);
    let today = ctx.today;
    let range = HeatmapRange::trailing_weeks(today, ctx.heatmap_weeks());

    if overall {
        let active = state.goals.list_active();
        if active.is_empty() {
            println!("No active goals.");
            return Ok(());
        }
        let map = query.heatmap(&HeatmapTarget::AllActive, range)?;
        print_heatmap(
            &format!("All active goals ({})", active.len()),
            &map,
        );
        print_legend();
        return Ok(());
    }

    let reports = match name {
        Some(name) => vec![query.goal_report(name, today)?],
        None => query.active_reports(today),
    };

    if reports.is_empty() {
        if state.goals.is_empty() {
            println!("No goals tracked yet.");
        } else {
            println!("No active goals. Restore one with: goalquest restore <name>");
        }
        return Ok(());
    }

    for report in &reports {
        let target = HeatmapTarget::Goal(report.goal.name.clone());
        let map = query.heatmap(&target, range)?;
        print_heatmap(&format!("Goal: {}", report.goal.name), &map);
        print_report(report, today);
    }
    print_legend();

    Ok(())
}
