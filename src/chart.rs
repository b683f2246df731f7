//! Fixed-width text rendering of the monthly timeline and the bar chart of
//! monthly sums.
//!
//! Every renderer returns a `String` so the caller decides where it goes.

use crate::stats::TaskTable;
use crate::utils::truncate_name;

pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

pub const BANNER: &str = r"
 _____  ______ _____   ____  _____ _______
|  __ \|  ____|  __ \ / __ \|  __ \__   __|
| |__) | |__  | |__) | |  | | |__) | | |
|  _  /|  __| |  ___/| |  | |  _  /  | |
| | \ \| |____| |    | |__| | | \ \  | |
|_|  \_\______|_|     \____/|_|  \_\ |_|
";

pub const MAX_NAME_WIDTH: usize = 15;
pub const MONTH_WIDTH: usize = 3;
pub const BAR_HEIGHT: usize = 8;

pub const NO_TIMELINE_DATA: &str = "No data available for timeline chart.";
pub const NO_MONTHLY_DATA: &str = "No data available for monthly chart.";

const LEGEND: &str = "Legend: ● (10+)  ◎ (6-9)  ○ (3-5)  · (1-2)    (0)";
const BAR: &str = " █ ";

/// Glyph tier for a monthly count.
pub fn count_symbol(count: u32) -> &'static str {
    match count {
        0 => "  ",
        1..=2 => " ·",
        3..=5 => " ○",
        6..=9 => " ◎",
        _ => " ●",
    }
}

/// Column geometry shared by the timeline and the monthly chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    pub name_width: usize,
    pub month_count: usize,
}

impl ChartLayout {
    /// `None` when there is nothing to draw.
    pub fn new(table: &TaskTable, top_projects: &[String]) -> Option<Self> {
        if table.is_empty() || top_projects.is_empty() {
            return None;
        }

        let longest = top_projects
            .iter()
            .map(|project| project.chars().count())
            .max()
            .unwrap_or(0);

        Some(Self {
            name_width: longest.min(MAX_NAME_WIDTH),
            month_count: table.month_count(),
        })
    }

    fn label_width(&self) -> usize {
        self.name_width + 2
    }

    fn months_width(&self) -> usize {
        self.month_count * MONTH_WIDTH + 1
    }

    pub fn separator(&self) -> String {
        format!(
            "{}+{}+{}",
            "-".repeat(self.name_width + 3),
            "-".repeat(self.months_width()),
            "-".repeat(7)
        )
    }
}

fn month_header(month: &str) -> &str {
    month.split_once('-').map_or(month, |(_, month)| month)
}

pub fn render_timeline(table: &TaskTable, top_projects: &[String]) -> String {
    let Some(layout) = ChartLayout::new(table, top_projects) else {
        return format!("{NO_TIMELINE_DATA}\n");
    };
    let width = layout.label_width();
    let separator = layout.separator();

    let mut out = String::from("\nProject Timeline Chart (Tasks Completed per Month)\n");
    out.push_str(&format!("{separator}\n"));

    out.push_str(&format!("{:<width$} |", "Project"));
    for month in table.months() {
        out.push_str(&format!(" {}", month_header(month)));
    }
    out.push_str(" | Total\n");
    out.push_str(&format!("{separator}\n"));

    for project in top_projects {
        out.push_str(&format!(
            "{:<width$} |",
            truncate_name(project, layout.name_width)
        ));

        let mut project_total = 0;
        for month in table.months() {
            let count = table.count(month, project);
            project_total += count;
            out.push(' ');
            out.push_str(count_symbol(count));
        }

        out.push_str(&format!(" | {project_total:5}\n"));
    }

    out.push_str(&format!("{separator}\n"));
    out
}

pub fn render_legend() -> String {
    format!("\n{LEGEND}\n")
}

/// Bar chart of per-month sums over the ranked projects only. Empty when
/// every sum is zero.
pub fn render_monthly_totals(table: &TaskTable, top_projects: &[String]) -> String {
    let Some(layout) = ChartLayout::new(table, top_projects) else {
        return format!("{NO_MONTHLY_DATA}\n");
    };

    let monthly_totals: Vec<u32> = table
        .months()
        .map(|month| table.month_total(month, top_projects))
        .collect();

    let max_total = monthly_totals.iter().copied().max().unwrap_or(0);
    if max_total == 0 {
        return String::new();
    }

    let width = layout.label_width();
    let grand_total: u32 = monthly_totals.iter().sum();

    let mut out = format!("\n{:<width$} |", "Month Sum");
    for total in &monthly_totals {
        out.push_str(&format!(" {total:2}"));
    }
    out.push_str(&format!(" | {grand_total:5}\n"));

    out.push_str(&format!(
        "{}+{}+-------\n",
        "-".repeat(layout.name_width + 3),
        "-".repeat(layout.months_width())
    ));

    for row in 0..BAR_HEIGHT {
        let level = (BAR_HEIGHT - row) as f64;
        let threshold = level * f64::from(max_total) / BAR_HEIGHT as f64;

        let label = if row == 0 { "Bar Chart" } else { "" };
        out.push_str(&format!("{label:<width$} |"));

        for total in &monthly_totals {
            let cell = if f64::from(*total) >= threshold {
                BAR
            } else {
                "   "
            };
            out.push_str(cell);
        }

        out.push_str(" |\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DoneTask;

    fn table_of(tasks: &[(&str, &str, u32)]) -> TaskTable {
        let mut table = TaskTable::new();
        for (project, month, times) in tasks {
            for _ in 0..*times {
                table.record(DoneTask {
                    project: project.to_string(),
                    month: month.to_string(),
                });
            }
        }
        table
    }

    fn names(projects: &[&str]) -> Vec<String> {
        projects.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn symbol_tiers() {
        assert_eq!(count_symbol(0), "  ");
        assert_eq!(count_symbol(1), " ·");
        assert_eq!(count_symbol(2), " ·");
        assert_eq!(count_symbol(3), " ○");
        assert_eq!(count_symbol(5), " ○");
        assert_eq!(count_symbol(6), " ◎");
        assert_eq!(count_symbol(9), " ◎");
        assert_eq!(count_symbol(10), " ●");
        assert_eq!(count_symbol(250), " ●");
    }

    #[test]
    fn timeline_for_two_projects() {
        let table = table_of(&[("alpha", "2024-01", 2), ("beta", "2024-02", 1)]);
        let rendered = render_timeline(&table, &names(&["alpha", "beta"]));

        let expected = "\n\
Project Timeline Chart (Tasks Completed per Month)\n\
--------+-------+-------\n\
Project | 01 02 | Total\n\
--------+-------+-------\n\
alpha   |  ·    |     2\n\
beta    |     · |     1\n\
--------+-------+-------\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn long_names_are_truncated() {
        let table = table_of(&[("a-very-long-project-name", "2024-01", 12)]);
        let rendered = render_timeline(&table, &names(&["a-very-long-project-name"]));

        assert!(rendered.contains("\na-very-long-pro   |  ● |    12\n"));
        assert!(!rendered.contains("a-very-long-proj"));
    }

    #[test]
    fn timeline_without_data() {
        assert_eq!(
            render_timeline(&TaskTable::new(), &[]),
            format!("{NO_TIMELINE_DATA}\n")
        );
        let table = table_of(&[("alpha", "2024-01", 1)]);
        assert_eq!(
            render_timeline(&table, &[]),
            format!("{NO_TIMELINE_DATA}\n")
        );
    }

    #[test]
    fn monthly_totals_scale_to_max() {
        let table = table_of(&[
            ("alpha", "2024-01", 8),
            ("alpha", "2024-02", 4),
            ("beta", "2024-03", 1),
        ]);
        let rendered = render_monthly_totals(&table, &names(&["alpha", "beta"]));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Month Sum |  8  4  1 |    13");
        assert_eq!(lines[2], "--------+----------+-------");
        assert_eq!(lines[3], "Bar Chart | █        |");
        assert_eq!(lines[6], "        | █        |");
        assert_eq!(lines[7], "        | █  █     |");
        assert_eq!(lines[10], "        | █  █  █  |");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn monthly_totals_ignore_unranked_projects() {
        let table = table_of(&[("alpha", "2024-01", 3), ("beta", "2024-01", 5)]);
        let rendered = render_monthly_totals(&table, &names(&["alpha"]));
        assert!(rendered.contains("Month Sum |  3 |     3\n"));
    }

    #[test]
    fn monthly_totals_skipped_when_all_zero() {
        let table = table_of(&[("alpha", "2024-01", 3)]);
        assert_eq!(render_monthly_totals(&table, &names(&["ghost"])), "");
        assert!(render_timeline(&table, &names(&["ghost"])).contains("ghost   |    |     0"));
    }

    #[test]
    fn monthly_totals_without_data() {
        assert_eq!(
            render_monthly_totals(&TaskTable::new(), &[]),
            format!("{NO_MONTHLY_DATA}\n")
        );
    }

    #[test]
    fn legend_lists_every_tier() {
        let legend = render_legend();
        for glyph in ["●", "◎", "○", "·"] {
            assert!(legend.contains(glyph));
        }
        assert!(legend.ends_with("(0)\n"));
    }

    #[test]
    fn month_header_is_month_digits() {
        assert_eq!(month_header("2024-07"), "07");
        assert_eq!(month_header("1999-12"), "12");
    }
}
