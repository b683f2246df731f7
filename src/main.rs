use anyhow::Result;
use clap::Parser;
use std::io::ErrorKind;
use tracing::warn;

use donechart::utils::{setup_logging, validate_args};
use donechart::{analyze_task_log, print_report, Args};

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|io_err| io_err.kind() == ErrorKind::NotFound)
}

fn run(args: &Args) -> Result<()> {
    let result = analyze_task_log(args)?;
    print_report(&result, args)
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = validate_args(&args) {
        println!("Error: {}", e);
        return Ok(());
    }

    // Failures are reported on stdout; the exit status stays 0.
    if let Err(e) = run(&args) {
        warn!(file_path = ?args.todo_file, error = %format!("{:#}", e), "Analysis failed");
        if is_not_found(&e) {
            println!("Error: File '{}' not found.", args.todo_file.display());
        } else {
            println!("An error occurred: {:#}", e);
        }
    }

    Ok(())
}
