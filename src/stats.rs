use std::collections::{BTreeMap, HashMap, HashSet};

use crate::parser::DoneTask;

/// Done-task counts keyed by `YYYY-MM`, then by project.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskTable {
    months: BTreeMap<String, HashMap<String, u32>>,
    // First-seen order, used as the ranking tie-break.
    projects: Vec<String>,
    seen: HashSet<String>,
}

impl TaskTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, task: DoneTask) {
        if self.seen.insert(task.project.clone()) {
            self.projects.push(task.project.clone());
        }
        *self
            .months
            .entry(task.month)
            .or_default()
            .entry(task.project)
            .or_insert(0) += 1;
    }

    pub fn count(&self, month: &str, project: &str) -> u32 {
        self.months
            .get(month)
            .and_then(|projects| projects.get(project))
            .copied()
            .unwrap_or(0)
    }

    /// Months in ascending (chronological) order.
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.months.keys().map(String::as_str)
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// Projects in the order they first appeared in the log.
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn project_total(&self, project: &str) -> u32 {
        self.months
            .values()
            .filter_map(|projects| projects.get(project))
            .sum()
    }

    /// Sum for one month, restricted to `projects`.
    pub fn month_total(&self, month: &str, projects: &[String]) -> u32 {
        projects
            .iter()
            .map(|project| self.count(month, project))
            .sum()
    }

    pub fn task_count(&self) -> u32 {
        self.months
            .values()
            .flat_map(|projects| projects.values())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Projects with the most done tasks, highest first, at most `n` of them.
/// Equal totals keep first-seen order.
pub fn top_projects(table: &TaskTable, n: usize) -> Vec<String> {
    let mut totals: Vec<(&String, u32)> = table
        .projects()
        .iter()
        .map(|project| (project, table.project_total(project)))
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals
        .into_iter()
        .take(n)
        .map(|(project, _)| project.clone())
        .collect()
}

#[derive(Debug)]
pub struct AnalysisResult {
    pub table: TaskTable,
    pub top_projects: Vec<String>,
}
