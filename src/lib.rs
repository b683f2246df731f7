pub mod args;
pub mod chart;
pub mod parser;
pub mod report;
pub mod stats;
pub mod tasklog;
pub mod utils;

pub use args::Args;
pub use parser::{parse_done_line, DoneTask};
pub use report::{analyze_task_log, print_report, render_report};
pub use stats::{top_projects, AnalysisResult, TaskTable};
pub use tasklog::{aggregate_lines, load_task_table};
