use regex::Regex;
use std::sync::LazyLock;

static DONE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^X\s+\[([\w-]+)\]\s+.+\((\d{4}-\d{2})-\d{2}\)\s*$")
        .expect("done-line pattern is valid")
});

/// A completed task: the project tag and the `YYYY-MM` it was finished in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneTask {
    pub project: String,
    pub month: String,
}

/// Matches `X [project] description (YYYY-MM-DD)`.
///
/// Anything else (open tasks, blank lines, comments) is `None`, not an error.
pub fn parse_done_line(line: &str) -> Option<DoneTask> {
    let captures = DONE_LINE.captures(line)?;
    Some(DoneTask {
        project: captures.get(1)?.as_str().to_string(),
        month: captures.get(2)?.as_str().to_string(),
    })
}
