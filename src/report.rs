use anyhow::Result;
use std::io::Write;
use std::time::Instant;
use tracing::info;

use crate::chart::{self, BANNER, CLEAR_SCREEN};
use crate::stats::{top_projects, AnalysisResult};
use crate::tasklog::load_task_table;
use crate::utils::month_label;
use crate::Args;

pub fn analyze_task_log(args: &Args) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", "Starting task log analysis");

    let table = load_task_table(&args.todo_file)?;
    let top_projects = top_projects(&table, args.top);

    if let (Some(first), Some(last)) = (table.months().next(), table.months().last()) {
        info!(
            action = "range",
            component = "analysis",
            first_month = month_label(first),
            last_month = month_label(last),
            "Months covered"
        );
    }

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "analysis",
        ranked_projects = top_projects.len(),
        duration_ms = total_time.as_millis(),
        "Analysis completed"
    );

    Ok(AnalysisResult {
        table,
        top_projects,
    })
}

/// Charts in display order: timeline, legend, monthly sums.
pub fn render_report(result: &AnalysisResult) -> String {
    let AnalysisResult {
        table,
        top_projects,
    } = result;

    let mut out = chart::render_timeline(table, top_projects);
    if !table.is_empty() && !top_projects.is_empty() {
        out.push_str(&chart::render_legend());
    }
    out.push_str(&chart::render_monthly_totals(table, top_projects));
    out
}

pub fn print_report(result: &AnalysisResult, args: &Args) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    if !args.no_clear {
        write!(stdout, "{CLEAR_SCREEN}")?;
    }
    writeln!(stdout, "{BANNER}")?;
    write!(stdout, "{}", render_report(result))?;
    stdout.flush()?;

    Ok(())
}
