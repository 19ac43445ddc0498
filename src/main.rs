mod cli;
mod consts;
mod fs;
mod input;
mod name;
mod plan;

use clap::Parser;
use cli::Args;
use eyre::{Result, WrapErr};
use input::TokenReader;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    println!("This program renames files in the current directory.");
    println!("It targets files named like 'NUMBER.EXTENSION' (e.g. 5.txt or 33.jpg) and");
    println!("adds 'a' to the numeric part, so with a = 2, 5.txt becomes 7.txt.");
    println!("Files whose original number is below 'b', or whose new number would be");
    println!("negative, are left alone.");
    println!();

    let stdin = std::io::stdin();
    let mut tokens = TokenReader::new(stdin.lock());
    let offset = tokens
        .prompt_int("Enter an integer 'a' (the number to add for renaming): ")
        .wrap_err("invalid input for 'a'")?;
    let minimum = tokens
        .prompt_int("Enter an integer 'b' (the minimum original number to rename): ")
        .wrap_err("invalid input for 'b'")?;

    let dir = std::env::current_dir()?;
    tracing::info!("searching for files in {}", dir.display());

    let mut files = fs::scan_dir(&dir).wrap_err("failed to read the current directory")?;
    if files.is_empty() {
        tracing::info!("no files matching NUMBER.EXTENSION found");
        return Ok(());
    }

    plan::sort_for_pass(&mut files, offset);
    tracing::debug!(
        count = files.len(),
        order = if offset >= 0 { "descending" } else { "ascending" },
        "renaming"
    );

    let summary = fs::rename_all(&files, offset, minimum);
    tracing::info!(
        "done: {} renamed, {} skipped, {} failed",
        summary.renamed,
        summary.skipped,
        summary.failed
    );

    Ok(())
}
