use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::parser::parse_done_line;
use crate::stats::TaskTable;

/// Folds lines into a [`TaskTable`], skipping anything that isn't a done task.
pub fn aggregate_lines<I, S>(lines: I) -> TaskTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = TaskTable::new();
    for line in lines {
        if let Some(task) = parse_done_line(line.as_ref()) {
            table.record(task);
        }
    }
    table
}

/// Reads the whole task log. A missing or unreadable file fails the run as a
/// whole; no partial table is returned.
pub fn load_task_table(path: &Path) -> Result<TaskTable> {
    let start_time = Instant::now();
    info!(action = "start", component = "task_log", file_path = ?path, "Reading task log");

    let file = File::open(path).with_context(|| format!("Failed to open task log {:?}", path))?;

    let mut table = TaskTable::new();
    let mut line_count = 0usize;
    for (line_num, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;
        line_count += 1;
        if let Some(task) = parse_done_line(&line) {
            table.record(task);
        }
    }

    let load_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "task_log",
        line_count,
        done_tasks = table.task_count(),
        months = table.month_count(),
        projects = table.projects().len(),
        duration_ms = load_time.as_millis(),
        "Task log aggregated"
    );
    Ok(table)
}
