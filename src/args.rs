use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "donechart",
    about = "Parse the done entries of a todo.txt and print an ASCII monthly timeline chart",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to your todo.txt
    pub todo_file: PathBuf,

    /// Number of top projects to show
    #[arg(short, long, default_value_t = 20)]
    pub top: usize,

    /// Do not clear the terminal before printing
    #[arg(long)]
    pub no_clear: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
