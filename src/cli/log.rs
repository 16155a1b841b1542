//! Log command implementation

use anyhow::{bail, Result};

use goalquest::parse_date;
use goalquest::progress::{HeatmapRange, HeatmapTarget};

use super::render::{print_heatmap, print_legend, print_log_outcome};
use super::{query, Context};

/// How a log amount applies to the day's quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAmount {
    /// `+N` / `-N`: add to the day's total
    Delta(i64),
    /// `N`: replace the day's total
    Set(i64),
}

impl LogAmount {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let Ok(value) = raw.parse::<i64>() else {
            bail!("Invalid amount '{raw}'. Use an integer like 5, +1 or -2.");
        };

        if raw.starts_with('+') || raw.starts_with('-') {
            Ok(Self::Delta(value))
        } else {
            Ok(Self::Set(value))
        }
    }
}

/// Log progress for a goal and show its heatmap
pub fn log_command(ctx: &Context, name: &str, amount: &str, date: Option<&str>) -> Result<()> {
    let amount = LogAmount::parse(amount)?;
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => ctx.today,
    };
    let today = ctx.today;

    let (outcome, state) = ctx.mutate(|tracker| match amount {
        LogAmount::Delta(delta) => tracker.log(name, date, delta, today),
        LogAmount::Set(value) => tracker.set_quantity(name, date, value, today),
    })?;

    let goal = state.goals.get(name)?;
    print_log_outcome(&outcome, &goal.unit);

    let range = HeatmapRange::trailing_weeks(today, ctx.heatmap_weeks());
    let map = query(&state).heatmap(&HeatmapTarget::Goal(name.to_string()), range)?;
    print_heatmap(&format!("Goal: {}", goal.name), &map);
    print_legend();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amounts() {
        assert_eq!(LogAmount::parse("+1").unwrap(), LogAmount::Delta(1));
        assert_eq!(LogAmount::parse("-5").unwrap(), LogAmount::Delta(-5));
        assert_eq!(LogAmount::parse("12").unwrap(), LogAmount::Set(12));
        assert_eq!(LogAmount::parse(" +3 ").unwrap(), LogAmount::Delta(3));
        assert!(LogAmount::parse("five").is_err());
        assert!(LogAmount::parse("1.5").is_err());
    }
}
